//! Persistent key-value stores for the language preference.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::{
    PoisonError,
    RwLock,
};

use serde_json::{
    Map,
    Value,
};

/// A string key-value store supplied by the host.
///
/// Stores never fail from the caller's point of view: an unreadable value is
/// absent and a failed write is dropped (and logged).
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Store for contexts without client persistence: always empty, writes are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl PreferenceStore for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) {
        tracing::debug!("No preference store available, dropping write to '{}'", key);
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored values.
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a JSON object file (`{"language": "km"}`).
///
/// The file is read on every `get`. A missing or corrupt file reads as empty.
/// Concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Location of the JSON file.
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file, degrading to an empty object.
    fn read_all(&self) -> Map<String, Value> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                tracing::warn!("Failed to read preference file {:?}: {}", self.path, e);
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::warn!("Preference file {:?} is not a JSON object, ignoring", self.path);
                Map::new()
            }
            Err(e) => {
                tracing::warn!("Failed to parse preference file {:?}: {}", self.path, e);
                Map::new()
            }
        }
    }

    /// Writes the whole file.
    fn write_all(&self, values: &Map<String, Value>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, content)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).and_then(Value::as_str).map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.read_all();
        values.insert(key.to_string(), Value::String(value.to_string()));
        if let Err(e) = self.write_all(&values) {
            tracing::warn!("Failed to write preference file {:?}: {}", self.path, e);
        }
    }
}
