//! The [`Host`] trait and its GitHub Actions implementation

use std::io::Write;

use crate::command::WorkflowCommand;
use crate::config::HostConfig;
use crate::file_command::issue_file_command;
use crate::Result;

/// Everything a CI step needs from its runner.
pub trait Host {
    /// Make `name=value` visible to the steps that follow.
    fn export_variable(&mut self, name: &str, value: &str) -> Result<()>;

    /// Set a step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    fn debug(&mut self, message: &str) -> Result<()>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;

    fn start_group(&mut self, name: &str) -> Result<()>;

    fn end_group(&mut self) -> Result<()>;

    /// Run `f` inside a collapsible log group.
    ///
    /// The group is closed even when `f` fails.
    fn group<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        self.start_group(name)?;
        let result = f(self);
        self.end_group()?;
        result
    }
}

/// GitHub Actions runner, writing workflow commands to `out`.
#[derive(Debug)]
pub struct GithubActions<W: Write> {
    config: HostConfig,
    out: W,
}

impl<W: Write> GithubActions<W> {
    pub fn new(config: HostConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Consume the host and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn issue(&mut self, command: WorkflowCommand) -> Result<()> {
        writeln!(self.out, "{command}")?;
        Ok(())
    }
}

impl<W: Write> Host for GithubActions<W> {
    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        match self.config.env_file.clone() {
            Some(path) => issue_file_command(&path, name, value),
            None => self.issue(WorkflowCommand::new("set-env", value).with_property("name", name)),
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match self.config.output_file.clone() {
            Some(path) => issue_file_command(&path, name, value),
            None => {
                writeln!(self.out)?;
                self.issue(WorkflowCommand::new("set-output", value).with_property("name", name))
            }
        }
    }

    fn debug(&mut self, message: &str) -> Result<()> {
        if !self.config.debug {
            return Ok(());
        }
        self.issue(WorkflowCommand::new("debug", message))
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("warning", message))
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("error", message))
    }

    fn start_group(&mut self, name: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("group", name))
    }

    fn end_group(&mut self) -> Result<()> {
        self.issue(WorkflowCommand::new("endgroup", ""))
    }
}
