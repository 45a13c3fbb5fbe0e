//! Export command implementation
//!
//! Parses the manifest and relays every entry to the runner.

use std::path::Path;

use toolenv_actions::Host;
use toolenv_core::{ToolVersions, parse_tool_versions};

use crate::error::Result;

/// Log group wrapping the per-tool lines.
pub const GROUP_NAME: &str = ".tool-versions";

/// Step output holding the JSON map.
pub const OUTPUT_NAME: &str = "tools";

const EXPORT_NOTICE: &str = "All found versions are exported to env variables";

/// Parse `manifest` and export its entries through `host`.
///
/// Each tool becomes a `<TOOL>_VERSION` variable and the whole map is set
/// as the `tools` step output. Nothing is exported when parsing fails.
pub fn run_export<H: Host>(host: &mut H, manifest: &Path) -> Result<ToolVersions> {
    host.debug(&manifest.display().to_string())?;

    let tools = parse_tool_versions(manifest)?;
    tracing::info!(count = tools.len(), "exporting tool versions");

    host.warning(EXPORT_NOTICE)?;
    host.group(GROUP_NAME, |host| {
        for entry in &tools {
            host.info(&format!(
                "Gathered '{}' version {}",
                entry.name,
                entry.version.as_deref().unwrap_or("undefined")
            ))?;

            if entry.is_blank() {
                host.warning("Skipping blank manifest line, no variable name to export")?;
                continue;
            }
            host.export_variable(&entry.env_var_name(), entry.version_or_empty())?;
        }
        Ok(())
    })?;

    let json = serde_json::to_string(&tools)?;
    host.set_output(OUTPUT_NAME, &json)?;

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolenv_actions::{GithubActions, HostConfig};
    use toolenv_test_utils::TestWorkspace;

    fn runner(ws: &TestWorkspace) -> GithubActions<Vec<u8>> {
        runner_with_debug(ws, false)
    }

    fn runner_with_debug(ws: &TestWorkspace, debug: bool) -> GithubActions<Vec<u8>> {
        let config = HostConfig {
            env_file: Some(ws.command_file("github_env")),
            output_file: Some(ws.command_file("github_output")),
            debug,
        };
        GithubActions::new(config, Vec::new())
    }

    /// Values of heredoc records, keyed by name, in file order.
    fn records(content: &str) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut lines = content.lines();
        while let Some(header) = lines.next() {
            let (name, delimiter) = header.split_once("<<").unwrap();
            let value = lines.next().unwrap();
            assert_eq!(lines.next(), Some(delimiter));
            out.push((name.to_string(), value.to_string()));
        }
        out
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_exports_every_tool() {
        let ws = TestWorkspace::new();
        let manifest = ws.write_manifest(&["nodejs 20.11.0", "python 3.12.1"]);
        let mut host = runner(&ws);

        let tools = run_export(&mut host, &manifest).unwrap();

        assert_eq!(tools.len(), 2);
        assert_eq!(
            records(&ws.read("github_env")),
            pairs(&[("NODEJS_VERSION", "20.11.0"), ("PYTHON_VERSION", "3.12.1")])
        );
        assert_eq!(
            records(&ws.read("github_output")),
            pairs(&[("tools", r#"{"nodejs":"20.11.0","python":"3.12.1"}"#)])
        );
    }

    #[test]
    fn test_log_lines_are_grouped() {
        let ws = TestWorkspace::new();
        let manifest = ws.write_manifest(&["rust 1.76.0"]);
        let mut host = runner(&ws);

        run_export(&mut host, &manifest).unwrap();

        let stdout = String::from_utf8(host.into_inner()).unwrap();
        assert_eq!(
            stdout,
            "::warning::All found versions are exported to env variables\n\
             ::group::.tool-versions\n\
             Gathered 'rust' version 1.76.0\n\
             ::endgroup::\n"
        );
    }

    #[test]
    fn test_missing_version_exports_empty_value() {
        let ws = TestWorkspace::new();
        let manifest = ws.write_manifest(&["shellcheck"]);
        let mut host = runner(&ws);

        run_export(&mut host, &manifest).unwrap();

        assert_eq!(
            records(&ws.read("github_env")),
            pairs(&[("SHELLCHECK_VERSION", "")])
        );
        assert_eq!(
            records(&ws.read("github_output")),
            pairs(&[("tools", r#"{"shellcheck":null}"#)])
        );
    }

    // Blank lines stay in the parsed map and the JSON output but have no
    // variable name to export.
    #[test]
    fn test_blank_line_is_not_exported() {
        let ws = TestWorkspace::new();
        let manifest = ws.write_manifest_raw("a 1\n\nb 2\n");
        let mut host = runner(&ws);

        let tools = run_export(&mut host, &manifest).unwrap();

        assert_eq!(tools.len(), 3);
        assert_eq!(
            records(&ws.read("github_env")),
            pairs(&[("A_VERSION", "1"), ("B_VERSION", "2")])
        );
        assert_eq!(
            records(&ws.read("github_output")),
            pairs(&[("tools", r#"{"a":"1","":null,"b":"2"}"#)])
        );
    }

    #[test]
    fn test_missing_manifest_exports_nothing() {
        let ws = TestWorkspace::new();
        let mut host = runner(&ws);

        let result = run_export(&mut host, &ws.manifest_path());

        assert!(result.is_err());
        assert_eq!(ws.read("github_env"), "");
        assert_eq!(ws.read("github_output"), "");
        assert_eq!(String::from_utf8(host.into_inner()).unwrap(), "");
    }

    #[test]
    fn test_debug_line_names_manifest() {
        let ws = TestWorkspace::new();
        let manifest = ws.write_manifest(&[]);
        let mut host = runner_with_debug(&ws, true);

        run_export(&mut host, &manifest).unwrap();

        let stdout = String::from_utf8(host.into_inner()).unwrap();
        let first = stdout.lines().next().unwrap();
        assert_eq!(first, format!("::debug::{}", manifest.display()));
    }
}
