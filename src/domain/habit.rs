/// Habit entity and id assignment
/// 
/// A habit is a single item on the user's daily list. Ids are small
/// integers assigned monotonically; completion is a plain flag that the
/// rollover controller resets at each day boundary.

use serde::{Deserialize, Serialize};

/// Something the user wants to do every day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, assigned as max(existing) + 1
    pub id: u32,
    /// Display name, never empty once stored
    pub name: String,
    /// Whether the habit has been completed today
    pub done: bool,
}

impl Habit {
    /// Create a new, not-yet-completed habit
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            done: false,
        }
    }
}

/// The id the next added habit should receive
pub fn next_id(habits: &[Habit]) -> u32 {
    habits.iter().map(|h| h.id).max().map_or(1, |max| max + 1)
}

/// Built-in starter set used only when no valid stored data exists
pub fn starter_habits() -> Vec<Habit> {
    vec![
        Habit::new(1, "Morning stretch"),
        Habit::new(2, "Drink a liter of water"),
        Habit::new(3, "Read for 15 minutes"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_on_empty_list() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        // Ids need not be contiguous after removals
        let habits = vec![Habit::new(2, "a"), Habit::new(7, "b"), Habit::new(3, "c")];
        assert_eq!(next_id(&habits), 8);
    }

    #[test]
    fn test_starter_habits_all_incomplete() {
        let habits = starter_habits();
        assert_eq!(habits.len(), 3);
        assert!(habits.iter().all(|h| !h.done));
        assert!(habits.iter().all(|h| !h.name.is_empty()));
    }
}
