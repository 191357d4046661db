//! Shared test utilities for dockfix integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory whose home directory is a temp dir.
//! - Provide helpers for seeding and reading the Docker config file.
//!
//! Invariants / Assumptions:
//! - Tests never touch the real `~/.docker/config.json`.
//! - `RUST_LOG` from the host is cleared so stderr output is predictable.

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a `dockfix` command whose home directory is `home`.
pub fn dockfix_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dockfix");

    // Home resolution: HOME on Unix, USERPROFILE on Windows
    cmd.env("HOME", home).env("USERPROFILE", home);

    // Clear potential host leakage
    cmd.env_remove("RUST_LOG");

    cmd
}

/// Path of the Docker config file under `home`.
#[allow(dead_code)]
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".docker").join("config.json")
}

/// Writes raw content to the Docker config file under `home`.
#[allow(dead_code)]
pub fn seed_config(home: &Path, content: &str) -> PathBuf {
    let path = config_path(home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

/// Reads the Docker config file under `home` as JSON.
#[allow(dead_code)]
pub fn read_config_json(home: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(config_path(home)).unwrap();
    serde_json::from_str(&content).unwrap()
}
