//! Workflow command formatting
//!
//! A workflow command is a single stdout line of the form
//! `::command key=value,key=value::message`.

use std::fmt;

const CMD_STRING: &str = "::";

/// A single `::command::` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand {
    command: String,
    properties: Vec<(String, String)>,
    message: String,
}

impl WorkflowCommand {
    pub fn new(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            properties: Vec::new(),
            message: message.into(),
        }
    }

    /// Add a `key=value` property. Empty values are skipped when rendered.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CMD_STRING}{}", self.command)?;

        let mut first = true;
        for (key, value) in self.properties.iter().filter(|(_, v)| !v.is_empty()) {
            let sep = if first { " " } else { "," };
            write!(f, "{sep}{key}={}", escape_property(value))?;
            first = false;
        }

        write!(f, "{CMD_STRING}{}", escape_data(&self.message))
    }
}

/// Escape command data so it stays on one line.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value; `:` and `,` are separators there.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
