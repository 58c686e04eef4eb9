/// Streak calculation over the history ledger
/// 
/// Streaks count consecutive perfect days. The current streak walks
/// backward from today; the best streak scans the whole ledger. Both treat
/// a day with no ledger entry as absent, not as zero: absence breaks
/// contiguity exactly like an imperfect day.

use crate::domain::datekey::{add_days, date_of, is_immediate_predecessor, key_of};
use crate::domain::HistoryLedger;

/// Consecutive perfect days ending today (inclusive)
/// 
/// Returns 0 when the ledger has no entry for `today` at all. Otherwise
/// walks one day at a time toward the past, stopping at the first missing
/// or imperfect day.
pub fn current_streak(history: &HistoryLedger, today: &str) -> u32 {
    if !history.contains(today) {
        return 0;
    }

    let mut streak = 0;
    let mut cursor = today.to_string();

    loop {
        match history.get(&cursor) {
            Some(day) if day.is_perfect() => streak += 1,
            _ => break,
        }

        let prev = key_of(add_days(date_of(&cursor), -1));
        if !history.contains(&prev) {
            break;
        }
        cursor = prev;
    }

    streak
}

/// Longest run of consecutive perfect days anywhere in the ledger
/// 
/// Scans keys in ascending date order. A run extends only when the
/// previous existing key is the calendar-immediate predecessor; a gap in
/// the ledger fails that adjacency check and starts a fresh run of 1.
pub fn best_streak(history: &HistoryLedger) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev_key: Option<&str> = None;

    for (key, day) in history.iter() {
        if !day.is_perfect() {
            run = 0;
            prev_key = Some(key.as_str());
            continue;
        }

        run = match prev_key {
            Some(prev) if run > 0 && is_immediate_predecessor(key, prev) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev_key = Some(key.as_str());
    }

    best
}
