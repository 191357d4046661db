//! Registers an extra CLI plugin directory in `cliPluginsExtraDirs`.
//!
//! Responsibilities:
//! - Make sure the plugin directory appears in the list exactly once.
//! - Replace a missing or non-array field with a fresh list.
//!
//! Invariants:
//! - Existing entries keep their order; the new directory is appended.
//! - Membership is exact string equality. Pre-existing duplicates are left alone.

use serde_json::Value;

use super::{LoadPolicy, Repair, WritePolicy};
use crate::constants::{CLI_PLUGINS_EXTRA_DIRS_KEY, HOMEBREW_PLUGIN_DIR};
use crate::persistence::ConfigDocument;

/// Adds a directory to `cliPluginsExtraDirs` so the Docker CLI finds plugins there.
///
/// Rewrites the config file on every run, starting from `{}` if the file is
/// missing or corrupt.
#[derive(Debug, Clone)]
pub struct PluginDirPatcher {
    plugin_dir: String,
}

impl PluginDirPatcher {
    pub fn new(plugin_dir: impl Into<String>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
        }
    }

    pub fn plugin_dir(&self) -> &str {
        &self.plugin_dir
    }
}

impl Default for PluginDirPatcher {
    fn default() -> Self {
        Self::new(HOMEBREW_PLUGIN_DIR)
    }
}

impl Repair for PluginDirPatcher {
    fn name(&self) -> &'static str {
        "plugin-dirs"
    }

    fn load_policy(&self) -> LoadPolicy {
        LoadPolicy::DefaultOnError
    }

    fn write_policy(&self) -> WritePolicy {
        WritePolicy::Always
    }

    fn apply(&self, document: &mut ConfigDocument) -> bool {
        ensure_plugin_dir(document, &self.plugin_dir)
    }
}

/// Ensures `plugin_dir` is listed in `cliPluginsExtraDirs`.
///
/// Returns true if the field was created, replaced, or extended.
pub fn ensure_plugin_dir(document: &mut ConfigDocument, plugin_dir: &str) -> bool {
    let mut changed = false;

    let field = document
        .as_map_mut()
        .entry(CLI_PLUGINS_EXTRA_DIRS_KEY)
        .or_insert_with(|| {
            changed = true;
            Value::Array(Vec::new())
        });

    if !field.is_array() {
        tracing::warn!(
            field = CLI_PLUGINS_EXTRA_DIRS_KEY,
            "Field is not a list, replacing it"
        );
        *field = Value::Array(Vec::new());
        changed = true;
    }

    if let Some(dirs) = field.as_array_mut()
        && !dirs.iter().any(|dir| dir.as_str() == Some(plugin_dir))
    {
        dirs.push(Value::String(plugin_dir.to_string()));
        changed = true;
    }

    changed
}
