use unstuck_core::{
    daily_progress, goal_percent, open_store_in_memory, recent_sleep, screen_time, seed,
    sleep_summary, today_activities, total_screen_minutes, upcoming_activities, Activity, Goal,
    NoopNotifier, SleepLog, SqliteKvStore, TrackerService,
};

const TODAY: &str = "2024-02-01";

fn sleep_log(date: &str, hours: f64, quality: f64) -> SleepLog {
    SleepLog {
        date: date.to_string(),
        hours,
        quality,
    }
}

#[test]
fn seeded_day_starts_at_zero_progress() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteKvStore::try_new(&conn).unwrap();
    let service = TrackerService::bootstrap_on(store, NoopNotifier, TODAY).unwrap();

    let progress = daily_progress(&service.state().activities, TODAY);
    assert_eq!(progress.completed, 0);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.rate, 0.0);
}

#[test]
fn completing_one_of_three_yields_a_third() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteKvStore::try_new(&conn).unwrap();
    let mut service = TrackerService::bootstrap_on(store, NoopNotifier, TODAY).unwrap();

    service.toggle_activity("1").unwrap();

    assert_eq!(service.points(), 10);
    let progress = daily_progress(&service.state().activities, TODAY);
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 3);
    assert!((progress.rate - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn today_filter_preserves_insertion_order() {
    let activities = vec![
        Activity::with_id("a", "First", "07:00", TODAY),
        Activity::with_id("b", "Other day", "07:00", "2024-02-02"),
        Activity::with_id("c", "Second", "09:00", TODAY),
    ];

    let today = today_activities(&activities, TODAY);
    let ids: Vec<_> = today.iter().map(|activity| activity.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn progress_rate_stays_within_bounds() {
    let empty: Vec<Activity> = Vec::new();
    assert_eq!(daily_progress(&empty, TODAY).rate, 0.0);

    let mut all_done = vec![
        Activity::with_id("a", "One", "07:00", TODAY),
        Activity::with_id("b", "Two", "08:00", TODAY),
    ];
    for activity in &mut all_done {
        activity.completed = true;
    }
    assert_eq!(daily_progress(&all_done, TODAY).rate, 100.0);
}

#[test]
fn sleep_summary_matches_exact_means() {
    let logs = seed::demo_sleep_logs();

    let summary = sleep_summary(&logs);
    assert_eq!(summary.average_hours, 7.5);
    assert_eq!(summary.average_quality, 7.8);
}

#[test]
fn sleep_summary_is_zero_for_empty_logs() {
    let summary = sleep_summary(&[]);
    assert_eq!(summary.average_hours, 0.0);
    assert_eq!(summary.average_quality, 0.0);
}

#[test]
fn sleep_summary_rounds_to_one_decimal() {
    let logs = vec![
        sleep_log("2024-01-01", 7.0, 8.0),
        sleep_log("2024-01-02", 7.5, 8.0),
        sleep_log("2024-01-03", 7.0, 9.0),
    ];

    // 21.5 / 3 = 7.1666..., 25 / 3 = 8.3333...
    let summary = sleep_summary(&logs);
    assert_eq!(summary.average_hours, 7.2);
    assert_eq!(summary.average_quality, 8.3);
}

#[test]
fn recent_sleep_takes_last_seven_reversed() {
    let logs: Vec<SleepLog> = (1..=9)
        .map(|day| sleep_log(&format!("2024-01-{day:02}"), 7.0, 7.0))
        .collect();

    let recent = recent_sleep(&logs);
    assert_eq!(recent.len(), 7);
    assert_eq!(recent[0].date, "2024-01-09");
    assert_eq!(recent[6].date, "2024-01-03");
}

#[test]
fn recent_sleep_handles_short_collections() {
    let logs = vec![
        sleep_log("2024-01-01", 6.0, 5.0),
        sleep_log("2024-01-02", 7.0, 6.0),
    ];

    let recent = recent_sleep(&logs);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, "2024-01-02");
    assert_eq!(recent[1].date, "2024-01-01");
}

#[test]
fn screen_time_sums_and_splits_minutes() {
    let usage = seed::demo_app_usage();

    assert_eq!(total_screen_minutes(&usage), 255);
    let time = screen_time(&usage);
    assert_eq!(time.hours, 4);
    assert_eq!(time.minutes, 15);
    assert_eq!(time.to_string(), "4h 15min");
}

#[test]
fn screen_time_is_zero_for_empty_usage() {
    let time = screen_time(&[]);
    assert_eq!(time.hours, 0);
    assert_eq!(time.minutes, 0);
}

#[test]
fn goal_percent_rounds_progress_ratio() {
    let goal = Goal {
        id: "1".to_string(),
        title: "Meditate 30 days in a row".to_string(),
        progress: 12.0,
        target: 30.0,
    };
    assert_eq!(goal_percent(&goal), 40);
}

#[test]
fn goal_percent_can_exceed_one_hundred() {
    let goal = Goal {
        id: "2".to_string(),
        title: "Read 5 books".to_string(),
        progress: 6.0,
        target: 5.0,
    };
    assert_eq!(goal_percent(&goal), 120);
}

#[test]
fn goal_percent_guards_non_positive_target() {
    let goal = Goal {
        id: "3".to_string(),
        title: "Unmeasurable".to_string(),
        progress: 4.0,
        target: 0.0,
    };
    assert_eq!(goal_percent(&goal), 0);
}

#[test]
fn upcoming_lists_first_three_incomplete() {
    let mut activities = vec![
        Activity::with_id("a", "One", "06:00", TODAY),
        Activity::with_id("b", "Two", "07:00", TODAY),
        Activity::with_id("c", "Three", "08:00", TODAY),
        Activity::with_id("d", "Four", "09:00", TODAY),
    ];

    let upcoming = upcoming_activities(&activities, TODAY);
    let ids: Vec<_> = upcoming.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    // Completing an early entry shifts the window forward.
    activities[0].completed = true;
    let upcoming = upcoming_activities(&activities, TODAY);
    let ids: Vec<_> = upcoming.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "d"]);
}

#[test]
fn upcoming_is_empty_when_everything_is_done() {
    let mut activities = vec![Activity::with_id("a", "One", "06:00", TODAY)];
    activities[0].completed = true;

    assert!(upcoming_activities(&activities, TODAY).is_empty());
}
