//! Path helpers for the Docker CLI configuration file.
//!
//! Responsibilities:
//! - Resolve `<home>/.docker/config.json` using the `directories` crate.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Tool-specific overrides. The location is fixed.

use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_NAME, DOCKER_DIR_NAME};
use crate::error::ConfigFileError;

/// Returns the path to the current user's Docker CLI configuration file.
///
/// - Linux/macOS: `~/.docker/config.json`
/// - Windows: `%USERPROFILE%\.docker\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigFileError> {
    let base_dirs = directories::BaseDirs::new().ok_or(ConfigFileError::HomeDirUnavailable)?;

    Ok(config_path_in(base_dirs.home_dir()))
}

/// Returns the Docker CLI configuration path under an explicit home directory.
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(DOCKER_DIR_NAME).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_path_in_appends_docker_segments() {
        let path = config_path_in(Path::new("/home/dev"));
        assert_eq!(path, Path::new("/home/dev/.docker/config.json"));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_default_config_path_follows_home() {
        let home = tempfile::tempdir().unwrap();
        let home_str = home.path().to_str().unwrap().to_string();

        temp_env::with_var("HOME", Some(home_str), || {
            let path = default_config_path().unwrap();
            assert_eq!(path, home.path().join(".docker").join("config.json"));
        });
    }
}
