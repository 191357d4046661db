//! dockfix - Repairs for the Docker CLI configuration file.
//!
//! Responsibilities:
//! - Parse the subcommand and set up logging.
//! - Run the selected repair against `~/.docker/config.json`.
//!
//! Does NOT handle:
//! - JSON loading, repair logic, or file writes (see `crates/config`).
//!
//! Invariants:
//! - Standard output stays silent; diagnostics go to stderr.
//! - Once a subcommand is parsed the process exits 0, even when the repair fails.

mod args;
mod dispatch;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run_command(cli) {
        tracing::error!("{:#}", e);
    }
}
