/// Schema migration for stored payloads
///
/// This module upgrades whatever is found under the primary key to the
/// current schema. Three shapes have existed: a bare habit array (v1), an
/// object with `lastDate` and `habits` (v2), and the current versioned
/// object that embeds the history ledger (v3). Decoding tries each known
/// variant in a fixed priority order and degrades to safe defaults; this
/// path never fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{starter_habits, Habit, HistoryLedger};

/// Current schema version of the primary payload
pub const SCHEMA_VERSION: u32 = 3;

/// The full persisted record in its current (v3) schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub version: u32,
    /// The day `habits[*].done` flags are currently valid for
    pub last_date: String,
    pub habits: Vec<Habit>,
    pub history: HistoryLedger,
}

impl PersistedState {
    /// Safe default: starter habits, today, and whatever legacy history exists
    fn defaults(today: &str, history: HistoryLedger) -> Self {
        Self {
            version: SCHEMA_VERSION,
            last_date: today.to_string(),
            habits: starter_habits(),
            history,
        }
    }
}

/// v3 payload as stored; `history` may be absent or null on early writes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageV3 {
    version: u32,
    last_date: String,
    habits: Vec<Habit>,
    #[serde(default)]
    history: Option<HistoryLedger>,
}

/// v2 payload: no version field, no embedded history yet
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageV2 {
    last_date: String,
    habits: Vec<Habit>,
}

/// The schema variants a primary payload can decode into
enum Schema {
    /// Oldest shape: a bare array of loosely-typed habits
    V1(Vec<Value>),
    V2(StorageV2),
    V3(StorageV3),
    Unrecognized,
}

/// Decode the primary payload into one of the known schema variants
///
/// Priority order matters: a v3 object also satisfies the v2 shape, so v3
/// is tried first; an object carrying some other `version` value falls
/// through to the v2 interpretation, which ignores it.
fn decode_primary(raw: &str) -> Schema {
    if let Ok(list) = serde_json::from_str::<Vec<Value>>(raw) {
        return Schema::V1(list);
    }
    if let Ok(v3) = serde_json::from_str::<StorageV3>(raw) {
        if v3.version == SCHEMA_VERSION {
            return Schema::V3(v3);
        }
    }
    if let Ok(v2) = serde_json::from_str::<StorageV2>(raw) {
        return Schema::V2(v2);
    }
    Schema::Unrecognized
}

/// Reinterpret one loosely-typed v1 element as a habit
///
/// Ids default to the 1-based position, names to the empty string. The v1
/// schema carried no date, so any stored completion state is unsafe to
/// trust and is discarded unconditionally.
fn coerce_v1_habit(value: &Value, index: usize) -> Habit {
    let id = value
        .get("id")
        .and_then(Value::as_u64)
        .map(|id| id as u32)
        .unwrap_or(index as u32 + 1);
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Habit {
        id,
        name,
        done: false,
    }
}

/// Parse the legacy history blob, tolerating any damage
///
/// Anything that is not a well-formed object of day summaries yields an
/// empty ledger rather than an error.
fn decode_legacy_history(raw: &str) -> HistoryLedger {
    match serde_json::from_str(raw) {
        Ok(history) => history,
        Err(err) => {
            tracing::warn!("Ignoring unreadable legacy history: {}", err);
            HistoryLedger::new()
        }
    }
}

/// Load and migrate stored payloads to the current schema
///
/// `primary` and `legacy` are the raw payloads read from their respective
/// keys (`None` when absent). `today` is the current date-key, used as
/// `last_date` whenever the stored one cannot be trusted.
pub fn load_state(primary: Option<&str>, legacy: Option<&str>, today: &str) -> PersistedState {
    let legacy_history = legacy.map(decode_legacy_history).unwrap_or_default();

    let Some(raw) = primary else {
        tracing::info!("No stored data found, starting from defaults");
        return PersistedState::defaults(today, legacy_history);
    };

    match decode_primary(raw) {
        Schema::V1(list) => {
            tracing::info!("Migrating v1 payload ({} habits)", list.len());
            let habits = list
                .iter()
                .enumerate()
                .map(|(index, value)| coerce_v1_habit(value, index))
                .collect();
            PersistedState {
                version: SCHEMA_VERSION,
                last_date: today.to_string(),
                habits,
                history: legacy_history,
            }
        }
        Schema::V3(v3) => PersistedState {
            version: SCHEMA_VERSION,
            last_date: v3.last_date,
            habits: v3.habits,
            history: v3.history.unwrap_or(legacy_history),
        },
        Schema::V2(v2) => {
            tracing::info!("Migrating v2 payload ({} habits)", v2.habits.len());
            PersistedState {
                version: SCHEMA_VERSION,
                last_date: v2.last_date,
                habits: v2.habits,
                // v2 predates embedded history, so only the legacy blob counts
                history: legacy_history,
            }
        }
        Schema::Unrecognized => {
            tracing::warn!("Unrecognized stored payload, starting from defaults");
            PersistedState::defaults(today, legacy_history)
        }
    }
}
