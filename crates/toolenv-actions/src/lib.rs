//! GitHub Actions runner integration for toolenv.
//!
//! The runner is driven two ways:
//!
//! 1. **Workflow commands** - `::name props::data` lines written to stdout
//!    for log groups, annotations and, on old runners, env/output values.
//!
//! 2. **File commands** - heredoc records appended to the files named by
//!    `GITHUB_ENV` and `GITHUB_OUTPUT`.
//!
//! [`GithubActions`] picks between them based on [`HostConfig`] and exposes
//! both through the [`Host`] trait.

pub mod command;
pub mod config;
pub mod error;
pub mod file_command;
pub mod host;
pub mod logging;

pub use command::WorkflowCommand;
pub use config::HostConfig;
pub use error::{Error, Result};
pub use host::{GithubActions, Host};
