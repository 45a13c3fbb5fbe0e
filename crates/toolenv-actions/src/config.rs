//! Runner settings read from the environment

use std::path::PathBuf;

/// Environment variable naming the env file command.
pub const GITHUB_ENV: &str = "GITHUB_ENV";
/// Environment variable naming the output file command.
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
/// Set to `1` by the runner when step debug logging is on.
pub const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

/// How to talk to the runner.
///
/// When a file path is `None` the legacy stdout command is used instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub env_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub debug: bool,
}

impl HostConfig {
    /// Read `GITHUB_ENV`, `GITHUB_OUTPUT` and `RUNNER_DEBUG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let file = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        Self {
            env_file: file(GITHUB_ENV),
            output_file: file(GITHUB_OUTPUT),
            debug: lookup(RUNNER_DEBUG).as_deref() == Some("1"),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = self.debug || debug;
        self
    }
}
