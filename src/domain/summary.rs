/// Day-summary snapshots of habit completion
///
/// A `DaySummary` freezes how much of the habit list was completed on one
/// calendar day. The current day's summary is re-derived on every habit
/// mutation; past days become immutable once the rollover controller has
/// finalized them into the history ledger.

use serde::{Deserialize, Serialize};

use crate::domain::Habit;

/// Completion snapshot for a single calendar day
///
/// Older stored records may lack `done_ids`, so the field is optional and
/// omitted from serialization when absent. Counts on foreign-shaped records
/// default to zero rather than failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaySummary {
    /// How many habits existed that day
    #[serde(default)]
    pub total: u32,
    /// How many of them were completed
    #[serde(default)]
    pub done: u32,
    /// Ids of the completed habits, in list order
    #[serde(
        default,
        rename = "doneIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub done_ids: Option<Vec<u32>>,
}

impl DaySummary {
    /// Reduce the current habit list into a day summary
    pub fn of(habits: &[Habit]) -> Self {
        let total = habits.len() as u32;
        let done = habits.iter().filter(|h| h.done).count() as u32;
        let done_ids = habits
            .iter()
            .filter(|h| h.done)
            .map(|h| h.id)
            .collect();
        Self {
            total,
            done,
            done_ids: Some(done_ids),
        }
    }

    /// A perfect day has at least one habit and all of them completed
    ///
    /// A day with zero habits is never perfect, so empty days cannot
    /// inflate streaks.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.done >= self.total
    }

    /// Completion rate of this summary as a whole percentage
    pub fn rate(&self) -> u32 {
        completion_rate(self.done, self.total)
    }
}

/// Percentage of `done` out of `total`, rounded; 0 when `total` is 0
pub fn completion_rate(done: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}
