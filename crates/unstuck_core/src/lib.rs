//! Core domain logic for the Unstuck routine tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod seed;
pub mod service;
pub mod state;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityId};
pub use model::goal::Goal;
pub use model::wellness::{AppUsage, SleepLog};
pub use notify::{LogNotifier, Notifier, NoopNotifier, NotifyPermission};
pub use service::tracker_service::{ServiceError, ServiceResult, TrackerService, POINT_AWARD};
pub use state::AppState;
pub use stats::{
    daily_progress, goal_percent, recent_sleep, screen_time, sleep_summary, today_activities,
    total_screen_minutes, upcoming_activities, DailyProgress, ScreenTime, SleepSummary,
};
pub use store::{
    open_store, open_store_in_memory, KvStore, SqliteKvStore, StoreError, StoreResult,
    ACTIVITIES_KEY, APPS_KEY, GOALS_KEY, POINTS_KEY, SLEEP_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
