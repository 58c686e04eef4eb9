/// Date-key handling for calendar days
///
/// A date-key is the canonical string identifier for a calendar day in the
/// `YYYY/MM/DD` format (zero-padded, so keys sort lexicographically in date
/// order). All keys are derived from the local wall clock, not UTC.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Fixed weekday labels indexed by days-from-Sunday
const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format a calendar date as a `YYYY/MM/DD` date-key
pub fn key_of(date: NaiveDate) -> String {
    format!("{:04}/{:02}/{:02}", date.year(), date.month(), date.day())
}

/// Today's date on the local wall clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date-key on the local wall clock
pub fn today_key() -> String {
    key_of(today())
}

/// Parse a date-key back into a calendar date
///
/// Malformed keys never fail: missing or unparseable month/day components
/// default to 1, and out-of-range values degrade the same way. A key with
/// no usable year falls back to the epoch date.
pub fn date_of(key: &str) -> NaiveDate {
    let mut parts = key.split('/');
    let year: i32 = parts
        .next()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(1970);
    let month: u32 = parts
        .next()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(1);
    let day: u32 = parts
        .next()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(1);

    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or_default()
}

/// Calendar arithmetic: `date` shifted by `diff` days (negative goes back)
pub fn add_days(date: NaiveDate, diff: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(diff)).unwrap_or(date)
}

/// True iff `candidate_prev` names the calendar day immediately before `key`
pub fn is_immediate_predecessor(key: &str, candidate_prev: &str) -> bool {
    key_of(add_days(date_of(key), -1)) == candidate_prev
}

/// Label for the day of the week a date falls on
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Human label for a date-key, e.g. `2024/01/03 (Wed)`
pub fn label_of(key: &str) -> String {
    format!("{} ({})", key, weekday_label(date_of(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_of_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(key_of(date), "2024/01/03");
    }

    #[test]
    fn test_date_of_round_trips() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(date_of(&key_of(date)), date);
    }

    #[test]
    fn test_date_of_defaults_missing_components() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_of("2024"), expected);
        assert_eq!(date_of("2024/"), expected);
        assert_eq!(date_of("2024/01"), expected);
    }

    #[test]
    fn test_date_of_degrades_out_of_range() {
        // Day 40 does not exist, so it falls back to the 1st
        let expected = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(date_of("2024/02/40"), expected);

        // Month 13 does not exist either, so both components fall back
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_of("2024/13/05"), expected);
    }

    #[test]
    fn test_add_days_handles_month_and_year_rollover() {
        let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(key_of(add_days(jan_1, -1)), "2023/12/31");
        assert_eq!(key_of(add_days(jan_1, 31)), "2024/02/01");
    }

    #[test]
    fn test_is_immediate_predecessor() {
        assert!(is_immediate_predecessor("2024/01/02", "2024/01/01"));
        assert!(is_immediate_predecessor("2024/01/01", "2023/12/31"));
        assert!(is_immediate_predecessor("2024/03/01", "2024/02/29"));
        assert!(!is_immediate_predecessor("2024/01/03", "2024/01/01"));
        assert!(!is_immediate_predecessor("2024/01/01", "2024/01/02"));
    }

    #[test]
    fn test_weekday_label_and_key_label() {
        // 2024/01/03 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(weekday_label(date), "Wed");
        assert_eq!(label_of("2024/01/03"), "2024/01/03 (Wed)");
    }
}
