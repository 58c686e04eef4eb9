/// Public library interface for the habit-loop tracker
/// 
/// This crate tracks a daily habit list, records per-day completion
/// snapshots into a bounded history ledger, derives streak and summary
/// statistics, and persists everything to a local key-value store across
/// sessions, migrating older stored schemas on load.

use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod store;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    load_state, JsonFileStore, KeyValueStore, MemoryStore, PersistedState, StorageError,
    LEGACY_HISTORY_KEY, PRIMARY_KEY, SCHEMA_VERSION,
};
pub use store::{HabitStore, HistoryItem, WeekdayRate};

/// Errors that can surface while standing the tracker up
/// 
/// The persistence and migration path itself never errors; only backend
/// construction and host-side plumbing can fail.
#[derive(Error, Debug)]
pub enum HabitLoopError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
