//! Fixed demo datasets installed on first use.
//!
//! # Responsibility
//! - Provide the literal demo content for every slice that has never been
//!   saved.
//!
//! # Invariants
//! - Seeding is idempotent per key: once a slice key exists in the store,
//!   its seed is never installed again.
//! - Seed values are fixed literals; only the activity date is computed
//!   (activities are seeded for "today").

use crate::model::activity::Activity;
use crate::model::goal::Goal;
use crate::model::wellness::{AppUsage, SleepLog};
use chrono::Local;

/// Points balance a fresh profile starts with.
pub const INITIAL_POINTS: u64 = 0;

/// Returns the local calendar date as a `YYYY-MM-DD` string.
pub fn local_date_string() -> String {
    Local::now().date_naive().to_string()
}

/// Three sample activities scheduled for the given date, none completed.
pub fn demo_activities(date: &str) -> Vec<Activity> {
    vec![
        Activity::with_id("1", "Morning meditation", "07:00", date),
        Activity::with_id("2", "Physical exercise", "08:00", date),
        Activity::with_id("3", "Evening reading", "20:00", date),
    ]
}

/// Five sample sleep logs in chronological ascending order.
pub fn demo_sleep_logs() -> Vec<SleepLog> {
    vec![
        SleepLog {
            date: "2024-01-15".to_string(),
            hours: 7.5,
            quality: 8.0,
        },
        SleepLog {
            date: "2024-01-16".to_string(),
            hours: 6.5,
            quality: 6.0,
        },
        SleepLog {
            date: "2024-01-17".to_string(),
            hours: 8.0,
            quality: 9.0,
        },
        SleepLog {
            date: "2024-01-18".to_string(),
            hours: 7.0,
            quality: 7.0,
        },
        SleepLog {
            date: "2024-01-19".to_string(),
            hours: 8.5,
            quality: 9.0,
        },
    ]
}

/// Three sample goals with partial progress.
pub fn demo_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            title: "Meditate 30 days in a row".to_string(),
            progress: 12.0,
            target: 30.0,
        },
        Goal {
            id: "2".to_string(),
            title: "Read 5 books".to_string(),
            progress: 2.0,
            target: 5.0,
        },
        Goal {
            id: "3".to_string(),
            title: "Exercise 20 times".to_string(),
            progress: 8.0,
            target: 20.0,
        },
    ]
}

/// Four sample app-usage entries.
pub fn demo_app_usage() -> Vec<AppUsage> {
    vec![
        AppUsage {
            name: "Instagram".to_string(),
            minutes: 45,
        },
        AppUsage {
            name: "YouTube".to_string(),
            minutes: 120,
        },
        AppUsage {
            name: "WhatsApp".to_string(),
            minutes: 60,
        },
        AppUsage {
            name: "Twitter".to_string(),
            minutes: 30,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{demo_activities, demo_app_usage, demo_goals, demo_sleep_logs, local_date_string};

    #[test]
    fn demo_activities_are_incomplete_and_dated() {
        let activities = demo_activities("2024-02-01");
        assert_eq!(activities.len(), 3);
        for activity in &activities {
            assert!(!activity.completed);
            assert_eq!(activity.date, "2024-02-01");
        }
    }

    #[test]
    fn demo_activity_ids_are_unique() {
        let activities = demo_activities("2024-02-01");
        let mut ids: Vec<_> = activities.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), activities.len());
    }

    #[test]
    fn demo_slices_have_expected_sizes() {
        assert_eq!(demo_sleep_logs().len(), 5);
        assert_eq!(demo_goals().len(), 3);
        assert_eq!(demo_app_usage().len(), 4);
    }

    #[test]
    fn local_date_string_is_iso_shaped() {
        let date = local_date_string();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }
}
