//! [`TestWorkspace`] builder for manifest and runner scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory for a toolenv run.
///
/// # Example
///
/// ```rust,no_run
/// use toolenv_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write_manifest(&["nodejs 20.11.0", "python 3.12.1"]);
/// assert!(ws.manifest_path().exists());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `.tool-versions` inside the workspace.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join(".tool-versions")
    }

    /// Write `.tool-versions` with LF line endings.
    pub fn write_manifest(&self, lines: &[&str]) -> PathBuf {
        self.write_manifest_raw(&join_lines(lines, "\n"))
    }

    /// Write `.tool-versions` with CRLF line endings.
    pub fn write_manifest_crlf(&self, lines: &[&str]) -> PathBuf {
        self.write_manifest_raw(&join_lines(lines, "\r\n"))
    }

    /// Write `.tool-versions` verbatim.
    pub fn write_manifest_raw(&self, content: &str) -> PathBuf {
        let path = self.manifest_path();
        fs::write(&path, content).unwrap();
        path
    }

    /// Create an empty runner command file (like `GITHUB_ENV`).
    pub fn command_file(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, "").unwrap();
        path
    }

    /// Read a file relative to the workspace root.
    pub fn read(&self, name: impl AsRef<Path>) -> String {
        fs::read_to_string(self.root().join(name)).unwrap()
    }
}

fn join_lines(lines: &[&str], ending: &str) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push_str(ending);
    }
    content
}
