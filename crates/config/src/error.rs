//! Error types for reading and writing the Docker CLI configuration file.
//!
//! Responsibilities:
//! - Define error variants for every way the config file can fail to load or save.
//! - Distinguish a missing file from an unreadable or malformed one.
//!
//! Does NOT handle:
//! - Deciding whether an error is fatal (see `repair::LoadPolicy`).
//!
//! Invariants:
//! - Every file-related variant carries the path it refers to.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, reading, or writing the config file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Unable to determine the user's home directory")]
    HomeDirUnavailable,

    #[error("Config file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file at {path} does not contain a JSON object (found {found})")]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigFileError {
    /// Returns true if the error means the file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigFileError::NotFound { .. })
    }
}
