/// Storage layer for persisting tracker state
/// 
/// This module defines the key-value store contract the tracker persists
/// through, the concrete backends (a JSON file on disk, and an in-memory
/// map for tests and embedding), and the migration loader that upgrades
/// possibly-stale stored payloads to the current schema.

pub mod json_file;
pub mod memory;
pub mod migrate;

// Re-export the main storage types
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use migrate::{load_state, PersistedState, SCHEMA_VERSION};

use thiserror::Error;

/// Primary key holding the full current-schema payload
pub const PRIMARY_KEY: &str = "habit-loop:habits";

/// Legacy key mirroring the history ledger alone
/// 
/// Written on every save for consumers still reading the old format, and
/// consulted as a fallback source of history during migration. Redundant,
/// never authoritative.
pub const LEGACY_HISTORY_KEY: &str = "habit-loop:history";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No writable data directory available")]
    NoDataDir,
}

/// String-keyed persistent store the tracker reads and writes through
/// 
/// This trait keeps backends swappable: the orchestrator only assumes a
/// synchronous get/set-by-string-key contract. `get` returning `Ok(None)`
/// means the key is absent; callers treat read errors as absent too, since
/// the migration path never propagates failures.
pub trait KeyValueStore {
    /// Read the payload stored at `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, replacing any previous payload
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
