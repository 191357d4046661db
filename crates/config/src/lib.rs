//! Docker CLI configuration repairs for dockfix.
//!
//! This crate locates, loads, repairs, and saves `~/.docker/config.json`.
//! Loading never fails the caller: missing or malformed files either fall
//! back to an empty document or skip the repair, depending on its policy.

pub mod constants;
mod error;
pub mod persistence;
pub mod repair;

pub use error::ConfigFileError;
pub use persistence::{
    ConfigDocument, config_path_in, default_config_path, load_or_default, read_config_file,
    write_config_file,
};
pub use repair::{
    CredentialSanitizer, LoadPolicy, PluginDirPatcher, Repair, RepairOutcome, SkipReason,
    WritePolicy, run_repair,
};
