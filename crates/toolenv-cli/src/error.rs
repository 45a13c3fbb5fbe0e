//! Error types for toolenv-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from toolenv-core
    #[error(transparent)]
    Core(#[from] toolenv_core::Error),

    /// Error from toolenv-actions
    #[error(transparent)]
    Actions(#[from] toolenv_actions::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
