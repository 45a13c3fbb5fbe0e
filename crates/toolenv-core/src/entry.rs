//! A single manifest line

/// One `(name, version)` pair taken from a manifest line.
///
/// Only the first two whitespace-delimited fields are meaningful. A line
/// with a single field has no version, and an empty line produces an entry
/// with an empty name. Neither case is rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersionEntry {
    pub name: String,
    pub version: Option<String>,
}

impl ToolVersionEntry {
    pub fn new(name: impl Into<String>, version: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            version: version.map(Into::into),
        }
    }

    /// Split a line into name and version.
    ///
    /// Any whitespace run separates fields, so a trailing `\r` left over
    /// from a CRLF file never ends up in the version.
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split_whitespace();
        let name = fields.next().unwrap_or_default();
        let version = fields.next();

        Self {
            name: name.to_string(),
            version: version.map(str::to_string),
        }
    }

    /// Name of the environment variable this entry is exported as.
    ///
    /// `nodejs` becomes `NODEJS_VERSION`.
    pub fn env_var_name(&self) -> String {
        format!("{}_VERSION", self.name.to_uppercase())
    }

    /// The version, or an empty string when the line had none.
    pub fn version_or_empty(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// True for entries produced by blank lines.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

impl std::fmt::Display for ToolVersionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
