//! Error types for toolenv-actions

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] toolenv_fs::Error),

    #[error("Failed to write workflow command: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected input: {field} should not contain the delimiter \"{delimiter}\"")]
    InvalidCommandValue { field: String, delimiter: String },
}
