/// JSON-file implementation of the key-value store
///
/// Persists all keys as a single JSON object file mapping key to payload
/// string. Writes go through a temp file and rename so a crash mid-write
/// cannot leave a truncated file behind.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{KeyValueStore, StorageError};

/// File-backed key-value store
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create) the store backed by the file at `path`
    ///
    /// A missing file starts empty; an unreadable or corrupt file is
    /// logged and treated as empty rather than refusing to start.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("Data file {:?} is corrupt, starting empty: {}", path, err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        tracing::info!("JSON file store initialized at: {:?}", path);
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()?;
        tracing::debug!("Wrote {} bytes under key {}", value.len(), key);
        Ok(())
    }
}
