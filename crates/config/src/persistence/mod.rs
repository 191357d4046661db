//! Configuration persistence for the Docker CLI config file.
//!
//! Responsibilities:
//! - Locate the config file under the user's home directory.
//! - Read the config file, falling back to an empty document when asked.
//! - Write the config file back with stable, human-readable formatting.
//!
//! Does NOT handle:
//! - Field-level repairs (see `repair`).
//! - Locking. Concurrent runs race and the last writer wins.
//!
//! Invariants:
//! - A loaded document is always a JSON object.
//! - Writes are a plain overwrite: no temp file, no rename, no backup.

mod document;
mod path;

pub use document::{ConfigDocument, load_or_default, read_config_file, write_config_file};
pub use path::{config_path_in, default_config_path};
