/// Bounded, date-keyed history of day summaries
///
/// The ledger maps date-keys to frozen `DaySummary` records. Storage order
/// carries no meaning; all ordering is derived from the lexicographic key
/// order, which matches date order because keys are zero-padded. Growth is
/// bounded: pruning keeps only the most recent entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::DaySummary;

/// Upper bound on retained history entries
pub const MAX_HISTORY_DAYS: usize = 90;

/// Date-keyed mapping of day summaries, bounded to [`MAX_HISTORY_DAYS`]
///
/// Serializes as a plain JSON object of `"YYYY/MM/DD": summary` pairs,
/// the same shape the legacy history blob used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger(BTreeMap<String, DaySummary>);

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry at `key`
    pub fn upsert(&mut self, key: impl Into<String>, summary: DaySummary) {
        self.0.insert(key.into(), summary);
    }

    pub fn get(&self, key: &str) -> Option<&DaySummary> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending date-key order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&String, &DaySummary)> {
        self.0.iter()
    }

    /// Date-keys in ascending order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.0.keys()
    }

    /// Evict oldest entries until at most `max` remain
    ///
    /// Keeps the `max` lexicographically greatest (most recent) keys.
    /// Idempotent: pruning an already-bounded ledger changes nothing.
    pub fn prune(&mut self, max: usize) {
        while self.0.len() > max {
            self.0.pop_first();
        }
    }
}

impl FromIterator<(String, DaySummary)> for HistoryLedger {
    fn from_iter<T: IntoIterator<Item = (String, DaySummary)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
