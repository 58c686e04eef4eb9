/// Domain module containing core business logic and data types
/// 
/// This module defines the core concepts of the tracker: habits, day-summary
/// snapshots, the bounded history ledger, date-key handling, and streak
/// calculation. Everything here is pure and synchronous; persistence lives
/// in the storage layer.

pub mod datekey;
pub mod habit;
pub mod ledger;
pub mod streak;
pub mod summary;

// Re-export public types for easy access
pub use datekey::*;
pub use habit::*;
pub use ledger::*;
pub use streak::*;
pub use summary::*;
