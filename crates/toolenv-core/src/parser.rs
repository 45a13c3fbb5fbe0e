//! Reading a manifest from disk

use std::path::Path;

use toolenv_fs::io;

use crate::{Result, ToolVersions};

/// Parse a `.tool-versions` file.
///
/// The file is streamed line by line and closed before returning, on
/// success and on error alike. Any read failure fails the whole call.
pub fn parse_tool_versions(path: impl AsRef<Path>) -> Result<ToolVersions> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "parsing tool versions");

    let lines = io::read_lines(path)?;
    let tools = ToolVersions::from_lines(lines)?;

    tracing::debug!(count = tools.len(), "parsed tool versions");
    Ok(tools)
}
