//! toolenv CLI
//!
//! Reads `.tool-versions` and exports each tool version to the GitHub
//! Actions job that runs it.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use toolenv_actions::{GithubActions, Host, HostConfig, logging};

use cli::Cli;
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    let config = HostConfig::from_env().with_debug(cli.verbose);
    let mut host = GithubActions::new(config, std::io::stdout());

    if let Err(e) = run(&cli, &mut host) {
        tracing::debug!(error = ?e, "run failed");
        if let Err(report_err) = host.error(&e.to_string()) {
            eprintln!("{}: {}", "error".red().bold(), report_err);
        }
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run<H: Host>(cli: &Cli, host: &mut H) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let manifest = cli.manifest_path(&cwd);

    commands::run_export(host, &manifest)?;
    Ok(())
}
