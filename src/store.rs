/// Habit store orchestration
///
/// `HabitStore` owns the in-memory `(last_date, habits, history)` triple,
/// exposes the mutation actions and derived views, and wires migration,
/// rollover, snapshotting and persistence together. All methods are
/// synchronous and take `&mut self` for mutation, so the triple can never
/// be observed mid-update.

use chrono::Datelike;

use crate::domain::{
    add_days, completion_rate, key_of, label_of, next_id, today, today_key, DaySummary, Habit,
    HistoryLedger, MAX_HISTORY_DAYS,
};
use crate::storage::{
    KeyValueStore, PersistedState, LEGACY_HISTORY_KEY, PRIMARY_KEY, SCHEMA_VERSION,
};

/// Weekly-summary labels, Monday first
const WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One row of the Monday-to-Sunday weekly summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayRate {
    pub label: &'static str,
    pub rate: u32,
}

/// One row of the history listing, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub date: String,
    /// Human label combining the date-key and weekday
    pub label: String,
    pub total: u32,
    pub done: u32,
    pub rate: u32,
}

/// The habit tracker's single state object
///
/// Construct once over a [`KeyValueStore`] backend, call [`init`] during
/// activation, then hand it to whatever layer renders views and invokes
/// actions. Re-activation events should call [`ensure_today`].
///
/// [`init`]: HabitStore::init
/// [`ensure_today`]: HabitStore::ensure_today
pub struct HabitStore<S: KeyValueStore> {
    backend: S,
    last_date: String,
    habits: Vec<Habit>,
    history: HistoryLedger,
    ready: bool,
}

impl<S: KeyValueStore> HabitStore<S> {
    /// Create a store over `backend`; no I/O happens until [`init`]
    ///
    /// [`init`]: HabitStore::init
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            last_date: today_key(),
            habits: crate::domain::starter_habits(),
            history: HistoryLedger::new(),
            ready: false,
        }
    }

    /// Activation sequence: load and migrate, roll over, snapshot, persist
    ///
    /// Only after this returns does the store begin auto-persisting on
    /// mutation; the `ready` gate keeps construction-time defaults from
    /// overwriting freshly-loaded state.
    pub fn init(&mut self) {
        if self.ready {
            return;
        }

        let today = today_key();
        let primary = self.read(PRIMARY_KEY);
        let legacy = self.read(LEGACY_HISTORY_KEY);
        let state =
            crate::storage::load_state(primary.as_deref(), legacy.as_deref(), &today);

        self.last_date = state.last_date;
        self.habits = state.habits;
        self.history = state.history;
        self.history.prune(MAX_HISTORY_DAYS);

        self.ensure_today();
        self.update_today_history();
        self.save();

        self.ready = true;
        tracing::debug!(
            "Store ready: {} habits, {} history entries",
            self.habits.len(),
            self.history.len()
        );
    }

    /// Day-boundary check; safe to call redundantly
    ///
    /// No-op while `last_date` is still today. Otherwise this finalizes
    /// the ending day into the ledger, resets every completion flag, and
    /// advances to today. This is the only place a `done` flag is reset
    /// and the only place a past day's ledger entry becomes immutable.
    pub fn ensure_today(&mut self) {
        let today = today_key();
        if self.last_date == today {
            return;
        }

        let summary = DaySummary::of(&self.habits);
        self.history.upsert(self.last_date.clone(), summary);
        self.history.prune(MAX_HISTORY_DAYS);

        for habit in &mut self.habits {
            habit.done = false;
        }
        tracing::info!("Rolled over from {} to {}", self.last_date, today);
        self.last_date = today;

        self.update_today_history();
        self.save();
    }

    // ===== Actions =====

    /// Add a habit; empty (after trimming) names are ignored
    pub fn add_habit(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let id = next_id(&self.habits);
        self.habits.push(Habit::new(id, name));
        self.after_mutation();
    }

    /// Flip one habit's completion flag for today
    pub fn toggle_habit(&mut self, id: u32) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            habit.done = !habit.done;
        }
        self.after_mutation();
    }

    /// Delete a habit by id
    pub fn remove_habit(&mut self, id: u32) {
        self.habits.retain(|h| h.id != id);
        self.after_mutation();
    }

    /// Rename a habit; empty (after trimming) names are ignored
    pub fn rename_habit(&mut self, id: u32, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            habit.name = name.to_string();
        }
        self.after_mutation();
    }

    /// Post-condition of every mutating action once the store is ready
    fn after_mutation(&mut self) {
        if !self.ready {
            return;
        }
        self.update_today_history();
        self.save();
    }

    /// Recompute and upsert today's ledger entry from the habit list
    fn update_today_history(&mut self) {
        let key = today_key();
        self.history.upsert(key, DaySummary::of(&self.habits));
        self.history.prune(MAX_HISTORY_DAYS);
    }

    /// Persist current schema to the primary key and mirror the ledger to
    /// the legacy key
    ///
    /// Each write is best-effort: a failure is logged and swallowed. The
    /// two writes are not transactional; the legacy key is redundant by
    /// contract, so a crash between them loses nothing authoritative.
    pub fn save(&mut self) {
        self.history.prune(MAX_HISTORY_DAYS);

        let state = PersistedState {
            version: SCHEMA_VERSION,
            last_date: self.last_date.clone(),
            habits: self.habits.clone(),
            history: self.history.clone(),
        };
        match serde_json::to_string(&state) {
            Ok(raw) => {
                if let Err(err) = self.backend.set(PRIMARY_KEY, &raw) {
                    tracing::warn!("Failed to write primary payload: {}", err);
                }
            }
            Err(err) => tracing::warn!("Failed to serialize primary payload: {}", err),
        }
        match serde_json::to_string(&self.history) {
            Ok(raw) => {
                if let Err(err) = self.backend.set(LEGACY_HISTORY_KEY, &raw) {
                    tracing::warn!("Failed to mirror legacy history: {}", err);
                }
            }
            Err(err) => tracing::warn!("Failed to serialize legacy history: {}", err),
        }
    }

    /// Read a raw payload, treating backend errors as absent
    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Failed to read key {}, treating as absent: {}", key, err);
                None
            }
        }
    }

    // ===== Derived views =====

    pub fn total_count(&self) -> u32 {
        self.habits.len() as u32
    }

    pub fn done_count(&self) -> u32 {
        self.habits.iter().filter(|h| h.done).count() as u32
    }

    /// Rounded completion percentage for today; 0 when there are no habits
    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.done_count(), self.total_count())
    }

    pub fn current_streak(&self) -> u32 {
        crate::domain::current_streak(&self.history, &today_key())
    }

    pub fn best_streak(&self) -> u32 {
        crate::domain::best_streak(&self.history)
    }

    /// Monday-to-Sunday rates for the current calendar week
    ///
    /// Anchored at today's wall-clock date, not at `last_date`: between
    /// midnight and the next rollover the summary can transiently reflect
    /// a day boundary the habit list has not crossed yet.
    pub fn weekly_summary(&self) -> Vec<WeekdayRate> {
        let today = today();
        let monday = add_days(today, -(today.weekday().num_days_from_monday() as i64));

        (0..7)
            .map(|i| {
                let key = key_of(add_days(monday, i));
                let rate = self
                    .history
                    .get(&key)
                    .map_or(0, |day| completion_rate(day.done, day.total));
                WeekdayRate {
                    label: WEEK_LABELS[i as usize],
                    rate,
                }
            })
            .collect()
    }

    /// One row per ledger entry, newest first
    pub fn history_items(&self) -> Vec<HistoryItem> {
        self.history
            .iter()
            .rev()
            .map(|(date, day)| HistoryItem {
                date: date.clone(),
                label: label_of(date),
                total: day.total,
                done: day.done,
                rate: completion_rate(day.done, day.total),
            })
            .collect()
    }

    // ===== Accessors =====

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn last_date(&self) -> &str {
        &self.last_date
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn version(&self) -> u32 {
        SCHEMA_VERSION
    }

    /// Get a reference to the storage backend (useful for testing)
    pub fn backend(&self) -> &S {
        &self.backend
    }
}
