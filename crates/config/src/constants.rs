//! Centralized constants for the dockfix workspace.
//!
//! Field names mirror the keys the Docker CLI reads from `config.json`.

// =============================================================================
// File Location
// =============================================================================

/// Directory under the user's home that holds the Docker CLI configuration.
pub const DOCKER_DIR_NAME: &str = ".docker";

/// Docker CLI configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Recognized Fields
// =============================================================================

/// Extra directories the Docker CLI searches for plugins.
pub const CLI_PLUGINS_EXTRA_DIRS_KEY: &str = "cliPluginsExtraDirs";

/// Global credential helper program name.
pub const CREDS_STORE_KEY: &str = "credsStore";

/// Per-registry credential helpers (registry -> helper name).
pub const CRED_HELPERS_KEY: &str = "credHelpers";

// =============================================================================
// Repair Targets
// =============================================================================

/// Plugin directory populated by Homebrew's `docker-compose` and friends.
pub const HOMEBREW_PLUGIN_DIR: &str = "/opt/homebrew/lib/docker/cli-plugins";

/// Credential helper shipped with Docker Desktop. Compared case-insensitively.
pub const DESKTOP_CREDENTIAL_HELPER: &str = "desktop";
