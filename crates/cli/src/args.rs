//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map each subcommand to the repair it runs.
//!
//! Non-responsibilities:
//! - Does not execute repairs (see `dispatch` module).
//! - Does not accept a config path. The Docker config location is fixed.

use clap::{Parser, Subcommand};
use dockfix_config::{CredentialSanitizer, PluginDirPatcher, Repair};

#[derive(Parser)]
#[command(name = "dockfix")]
#[command(about = "Repair the Docker CLI configuration file (~/.docker/config.json)", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dockfix plugin-dirs\n  dockfix credentials\n  RUST_LOG=debug dockfix credentials\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Register the Homebrew CLI plugin directory in cliPluginsExtraDirs
    PluginDirs,

    /// Remove the Docker Desktop credential helper from credsStore and credHelpers
    Credentials,
}

impl Commands {
    /// Returns the repair this subcommand runs.
    pub fn repair(self) -> Box<dyn Repair> {
        match self {
            Commands::PluginDirs => Box::new(PluginDirPatcher::default()),
            Commands::Credentials => Box::new(CredentialSanitizer::default()),
        }
    }
}
