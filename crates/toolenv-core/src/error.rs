//! Error types for toolenv-core

/// Result type for toolenv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest could not be opened or read
    #[error(transparent)]
    Fs(#[from] toolenv_fs::Error),
}

impl Error {
    /// The underlying I/O error kind, if any.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Fs(e) => e.io_kind(),
        }
    }
}
