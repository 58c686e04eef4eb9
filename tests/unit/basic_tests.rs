/// Unit tests exercising the public library surface
use habit_loop::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_date_key_round_trip() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let key = key_of(date);
        assert_eq!(key, "2024/01/03");
        assert_eq!(date_of(&key), date);
    }

    #[test]
    fn test_summary_calculator() {
        let habits = vec![
            Habit::new(1, "a"),
            Habit {
                id: 2,
                name: "b".to_string(),
                done: true,
            },
        ];
        let summary = DaySummary::of(&habits);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.done_ids, Some(vec![2]));
        assert!(!summary.is_perfect());
    }

    #[test]
    fn test_current_streak_worked_example() {
        let mut history = HistoryLedger::new();
        history.upsert(
            "2024/01/01",
            DaySummary {
                total: 2,
                done: 1,
                done_ids: None,
            },
        );
        history.upsert(
            "2024/01/02",
            DaySummary {
                total: 2,
                done: 2,
                done_ids: None,
            },
        );
        history.upsert(
            "2024/01/03",
            DaySummary {
                total: 2,
                done: 2,
                done_ids: None,
            },
        );

        // 01/02 and 01/03 are perfect and contiguous; 01/01 breaks the chain
        assert_eq!(current_streak(&history, "2024/01/03"), 2);
        assert_eq!(best_streak(&history), 2);
    }

    #[test]
    fn test_migration_never_fails() {
        for raw in ["garbage", "{}", "[]", "null", "{\"version\": 99}"] {
            let state = load_state(Some(raw), None, "2024/06/15");
            assert_eq!(state.version, SCHEMA_VERSION);
            assert!(!state.last_date.is_empty());
        }
    }

    #[test]
    fn test_store_creation() {
        let store = HabitStore::new(MemoryStore::new());
        assert!(!store.ready());
        assert_eq!(store.version(), SCHEMA_VERSION);
    }
}
