//! CLI argument parsing using clap derive

use std::path::{Path, PathBuf};

use clap::Parser;
use toolenv_fs::ManifestFile;

/// Export `.tool-versions` entries as `<TOOL>_VERSION` variables and a
/// `tools` JSON output for the following workflow steps.
///
/// Always reads `.tool-versions` from the current directory.
#[derive(Parser, Debug)]
#[command(name = "toolenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable diagnostics on stderr and debug lines in the job log
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the manifest path against `cwd`.
    pub fn manifest_path(&self, cwd: &Path) -> PathBuf {
        ManifestFile::ToolVersions.resolve(cwd)
    }
}
