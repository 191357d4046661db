//! In-memory Docker CLI configuration document and its on-disk form.
//!
//! Responsibilities:
//! - Hold the configuration as an ordered JSON object (`ConfigDocument`).
//! - Read and parse the config file, reporting why it could not be used.
//! - Collapse any load failure to an empty document when asked to.
//! - Serialize and overwrite the config file.
//!
//! Does NOT handle:
//! - Deciding which fields to change (see `repair`).
//! - Atomic replacement or backups. Writes overwrite the file in place.
//!
//! Invariants:
//! - The root is always a JSON object, never null or another JSON type.
//! - Key order from the file is preserved across load and save.
//! - Saved files use 2-space indentation and end with a newline.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigFileError;

/// A Docker CLI configuration document.
///
/// Unknown fields are carried through untouched so a repair only ever
/// changes the keys it owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    /// Creates an empty document (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parses document text.
    ///
    /// Blank input is treated as `{}`. A valid JSON value whose root is not an
    /// object is rejected with `ConfigFileError::NotAnObject`.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigFileError> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let value: Value = serde_json::from_str(content).map_err(|e| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ConfigFileError::NotAnObject {
                path: path.to_path_buf(),
                found: value_kind(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.root.get_mut(key)
    }

    /// Removes a key while keeping the relative order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.root.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }

    /// Renders the document the way it is stored on disk.
    pub fn to_pretty_string(&self) -> Result<String, ConfigFileError> {
        let mut content =
            serde_json::to_string_pretty(&self.root).map_err(ConfigFileError::Serialize)?;
        content.push('\n');
        Ok(content)
    }
}

impl From<Map<String, Value>> for ConfigDocument {
    fn from(root: Map<String, Value>) -> Self {
        Self::from_map(root)
    }
}

/// Reads and parses the config file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigDocument, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigFileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigFileError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    ConfigDocument::parse(&content, path)
}

/// Loads the config file, substituting an empty document on any failure.
///
/// A missing file is expected on fresh installs and only logged at debug level.
/// Unreadable or malformed files are logged as warnings since the caller is
/// about to discard their contents.
pub fn load_or_default(path: &Path) -> ConfigDocument {
    match read_config_file(path) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            ConfigDocument::new()
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Config file is unusable, using defaults"
            );
            ConfigDocument::new()
        }
    }
}

/// Serializes the document and overwrites the config file.
///
/// The parent directory is created if it doesn't exist.
pub fn write_config_file(path: &Path, document: &ConfigDocument) -> Result<(), ConfigFileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let content = document.to_pretty_string()?;
    std::fs::write(path, content).map_err(|e| ConfigFileError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Config saved");

    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
