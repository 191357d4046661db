//! Idempotent repairs applied to the Docker CLI config file.
//!
//! Responsibilities:
//! - Define the `Repair` seam: one in-memory mutation plus its load and write policies.
//! - Drive the Locate → Load → Mutate → Write pipeline (`run_repair`).
//!
//! Does NOT handle:
//! - Path resolution (see `persistence::default_config_path`).
//! - Process exit codes or logging setup (see `crates/cli`).
//!
//! Invariants:
//! - A `SkipOnError` repair never writes when the file is missing or unusable.
//! - An `OnChange` repair never writes when `apply` reports no change.
//! - Skipped and unchanged runs leave the file byte-for-byte untouched.

use std::path::Path;

use crate::error::ConfigFileError;
use crate::persistence::{ConfigDocument, load_or_default, read_config_file, write_config_file};

mod credentials;
mod plugin_dirs;

pub use credentials::{CredentialSanitizer, strip_credential_helper};
pub use plugin_dirs::{PluginDirPatcher, ensure_plugin_dir};

/// What a repair does when the config file is missing or cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Start from an empty document and carry on.
    DefaultOnError,
    /// Leave the file alone and report the run as skipped.
    SkipOnError,
}

/// When a repair writes the document back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Rewrite the file on every run, even if nothing changed.
    Always,
    /// Rewrite the file only when `apply` reported a change.
    OnChange,
}

/// Why a `SkipOnError` repair did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The config file does not exist.
    Missing,
    /// The config file exists but could not be read or parsed.
    Unusable,
}

/// Result of running a repair against a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// The file was (re)written. `changed` is false when the rewrite was forced
    /// by `WritePolicy::Always` and the content was already correct.
    Written { changed: bool },
    /// The repair ran but had nothing to do, so the file was not touched.
    Unchanged,
    /// The file could not be loaded and the repair's policy is to skip.
    Skipped(SkipReason),
}

/// A single mutation of the Docker CLI config document.
pub trait Repair {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    fn load_policy(&self) -> LoadPolicy;

    fn write_policy(&self) -> WritePolicy;

    /// Mutates the document in place, returning true if anything changed.
    fn apply(&self, document: &mut ConfigDocument) -> bool;
}

/// Loads the config file at `path`, applies `repair`, and writes the result
/// according to the repair's policies.
///
/// # Errors
/// Only write-side failures are returned. Load failures are absorbed by the
/// repair's `LoadPolicy`.
pub fn run_repair<R: Repair + ?Sized>(
    repair: &R,
    path: &Path,
) -> Result<RepairOutcome, ConfigFileError> {
    let mut document = match repair.load_policy() {
        LoadPolicy::DefaultOnError => load_or_default(path),
        LoadPolicy::SkipOnError => match read_config_file(path) {
            Ok(document) => document,
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    repair = repair.name(),
                    path = %path.display(),
                    "Config file not found, nothing to repair"
                );
                return Ok(RepairOutcome::Skipped(SkipReason::Missing));
            }
            Err(e) => {
                tracing::warn!(
                    repair = repair.name(),
                    path = %path.display(),
                    error = %e,
                    "Config file is unusable, leaving it untouched"
                );
                return Ok(RepairOutcome::Skipped(SkipReason::Unusable));
            }
        },
    };

    let changed = repair.apply(&mut document);

    if !changed && repair.write_policy() == WritePolicy::OnChange {
        tracing::debug!(repair = repair.name(), path = %path.display(), "No changes needed");
        return Ok(RepairOutcome::Unchanged);
    }

    write_config_file(path, &document)?;
    tracing::debug!(
        repair = repair.name(),
        path = %path.display(),
        changed,
        "Config file written"
    );

    Ok(RepairOutcome::Written { changed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CREDS_STORE_KEY;

    /// Repair whose change report is fixed up front.
    struct Toggle {
        changes: bool,
        load: LoadPolicy,
        write: WritePolicy,
    }

    impl Repair for Toggle {
        fn name(&self) -> &'static str {
            "toggle"
        }

        fn load_policy(&self) -> LoadPolicy {
            self.load
        }

        fn write_policy(&self) -> WritePolicy {
            self.write
        }

        fn apply(&self, document: &mut ConfigDocument) -> bool {
            if self.changes {
                document.remove(CREDS_STORE_KEY);
            }
            self.changes
        }
    }

    #[test]
    fn test_on_change_without_change_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"credsStore\":\"osxkeychain\"}").unwrap();

        let repair = Toggle {
            changes: false,
            load: LoadPolicy::SkipOnError,
            write: WritePolicy::OnChange,
        };

        assert_eq!(run_repair(&repair, &path).unwrap(), RepairOutcome::Unchanged);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\"credsStore\":\"osxkeychain\"}"
        );
    }

    #[test]
    fn test_always_rewrites_without_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"credsStore\":\"osxkeychain\"}").unwrap();

        let repair = Toggle {
            changes: false,
            load: LoadPolicy::DefaultOnError,
            write: WritePolicy::Always,
        };

        assert_eq!(
            run_repair(&repair, &path).unwrap(),
            RepairOutcome::Written { changed: false }
        );
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"credsStore\": \"osxkeychain\"\n}\n"
        );
    }

    #[test]
    fn test_skip_on_error_reports_missing_and_unusable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let repair = Toggle {
            changes: true,
            load: LoadPolicy::SkipOnError,
            write: WritePolicy::OnChange,
        };

        assert_eq!(
            run_repair(&repair, &path).unwrap(),
            RepairOutcome::Skipped(SkipReason::Missing)
        );
        assert!(!path.exists());

        std::fs::write(&path, "not valid json").unwrap();
        assert_eq!(
            run_repair(&repair, &path).unwrap(),
            RepairOutcome::Skipped(SkipReason::Unusable)
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not valid json");
    }

    #[test]
    fn test_default_on_error_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "[\"not\", \"an\", \"object\"]").unwrap();

        let repair = Toggle {
            changes: false,
            load: LoadPolicy::DefaultOnError,
            write: WritePolicy::Always,
        };

        run_repair(&repair, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"credsStore\":\"desktop\"}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444)).unwrap();

        let repair = Toggle {
            changes: true,
            load: LoadPolicy::SkipOnError,
            write: WritePolicy::OnChange,
        };
        let result = run_repair(&repair, &path);

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        // Root ignores file permissions, so only assert when the write was refused.
        if let Err(e) = result {
            assert!(matches!(e, ConfigFileError::Write { .. }));
        }
    }
}
