//! Well-known file names.

use std::path::{Path, PathBuf};

/// Manifest files understood by toolenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFile {
    /// The asdf `.tool-versions` file
    ToolVersions,
}

impl ManifestFile {
    /// Get the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolVersions => ".tool-versions",
        }
    }

    /// Resolve the manifest against a directory.
    pub fn resolve(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.as_str())
    }
}

impl AsRef<Path> for ManifestFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ManifestFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
