/// In-memory implementation of the key-value store
///
/// Used by tests and by hosts that manage persistence themselves. Same
/// contract as the file backend, minus the disk.

use std::collections::HashMap;

use crate::storage::{KeyValueStore, StorageError};

/// HashMap-backed key-value store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
