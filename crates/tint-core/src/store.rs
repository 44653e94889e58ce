//! Key-value persistence boundary.
//!
//! The original tool persisted through a browser-local key-value store; here
//! the same contract is a small trait so the palette and state logic stay
//! testable without touching the filesystem. One JSON value lives under each
//! fixed key. Reads happen once at startup, writes go through on every
//! mutation, and corrupt or missing data degrades to defaults with a logged
//! warning rather than an error.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Store key for the saved palette (JSON array of uppercase hex strings).
pub const PALETTE_KEY: &str = "palette";
/// Store key for user-added presets (JSON array of `{name, hex}` entries).
pub const PRESETS_KEY: &str = "presets";
/// Store key for the persisted current color (JSON `{r, g, b}`).
pub const CURRENT_KEY: &str = "current";

/// Durable key-value storage for one JSON value per key.
pub trait KvStore {
    /// Load the raw value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any existing value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Load and deserialize the value under `key`, falling back to `T::default()`.
///
/// Unreadable or corrupt data is logged and replaced with the default,
/// never propagated upward.
pub fn load_or_default<T>(store: &dyn KvStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "stored value is corrupt, using default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(key, %err, "store unavailable, using default");
            T::default()
        }
    }
}

/// Serialize `value` and write it through under `key`.
pub fn save_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StoreError::SerializeFailed(key.to_string(), e.to_string()))?;
    store.save(key, &raw)
}

/// File-backed store: one `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::ReadFailed(path.display().to_string(), e.to_string()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::WriteFailed(parent.display().to_string(), e.to_string())
            })?;
        }

        // Stage into a temp file and rename into place; readers never see
        // a partially written value.
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(|e| {
            StoreError::WriteFailed(tmp_path.display().to_string(), e.to_string())
        })?;
        std::fs::rename(&tmp_path, &path)
            .map_err(|e| StoreError::WriteFailed(path.display().to_string(), e.to_string()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteFailed(
                path.display().to_string(),
                e.to_string(),
            )),
        }
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, bypassing serialization (test helper).
    pub fn insert_raw(&self, key: &str, value: &str) {
        let mut guard = self.values.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(key.to_string(), value.to_string());
    }
}

impl KvStore for MemStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.values.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.values.lock().unwrap_or_else(|e| e.into_inner());
        guard.remove(key);
        Ok(())
    }
}
