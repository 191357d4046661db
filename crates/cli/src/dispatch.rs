//! Command dispatch logic.
//!
//! Responsibilities:
//! - Resolve the Docker config path.
//! - Run the repair selected by the parsed subcommand.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Deciding the exit code. Errors are logged by `main()` and absorbed.

use anyhow::{Context, Result};
use dockfix_config::{default_config_path, run_repair};

use crate::args::Cli;

/// Runs the repair for the parsed subcommand against `~/.docker/config.json`.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let path = default_config_path().context("Failed to locate Docker config file")?;
    let repair = cli.command.repair();

    let outcome = run_repair(repair.as_ref(), &path)
        .with_context(|| format!("Failed to update {}", path.display()))?;

    tracing::info!(
        repair = repair.name(),
        path = %path.display(),
        outcome = ?outcome,
        "Repair finished"
    );

    Ok(())
}
