//! Derived view computations.
//!
//! # Responsibility
//! - Compute the read-side projections consumed by the rendering surface.
//!
//! # Invariants
//! - Every function is pure over current state; nothing here is persisted.
//! - Collection order is preserved; no function sorts its input.

use crate::model::activity::Activity;
use crate::model::goal::Goal;
use crate::model::wellness::{AppUsage, SleepLog};
use std::fmt::{Display, Formatter};

/// How many upcoming activities the reminder view shows.
const UPCOMING_LIMIT: usize = 3;
/// How many sleep entries the recent-sleep view shows.
const RECENT_SLEEP_LIMIT: usize = 7;

/// Completion figures for one selected date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyProgress {
    /// Completed activities on the selected date.
    pub completed: usize,
    /// All activities on the selected date.
    pub total: usize,
    /// `completed / total * 100`, or 0 when the date has no activities.
    pub rate: f64,
}

/// Aggregate sleep figures over the whole log collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepSummary {
    /// Mean hours per night, one decimal, 0 for an empty collection.
    pub average_hours: f64,
    /// Mean quality score, one decimal, 0 for an empty collection.
    pub average_quality: f64,
}

/// Total screen time split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenTime {
    pub hours: u64,
    pub minutes: u64,
}

impl Display for ScreenTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}min", self.hours, self.minutes)
    }
}

/// Activities belonging to the selected date, in collection order.
pub fn today_activities<'a>(activities: &'a [Activity], selected_date: &str) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|activity| activity.date == selected_date)
        .collect()
}

/// Completion counts and rate for the selected date.
pub fn daily_progress(activities: &[Activity], selected_date: &str) -> DailyProgress {
    let today = today_activities(activities, selected_date);
    let total = today.len();
    let completed = today.iter().filter(|activity| activity.completed).count();
    let rate = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    DailyProgress {
        completed,
        total,
        rate,
    }
}

/// Arithmetic means over all sleep logs, rounded to one decimal.
pub fn sleep_summary(logs: &[SleepLog]) -> SleepSummary {
    if logs.is_empty() {
        return SleepSummary {
            average_hours: 0.0,
            average_quality: 0.0,
        };
    }
    let count = logs.len() as f64;
    let hours: f64 = logs.iter().map(|log| log.hours).sum();
    let quality: f64 = logs.iter().map(|log| log.quality).sum();
    SleepSummary {
        average_hours: round_one_decimal(hours / count),
        average_quality: round_one_decimal(quality / count),
    }
}

/// Last 7 sleep entries in reverse storage order (most recent first).
///
/// This is a positional slice, not a date sort: it assumes the stored order
/// is chronological ascending.
pub fn recent_sleep(logs: &[SleepLog]) -> Vec<&SleepLog> {
    let start = logs.len().saturating_sub(RECENT_SLEEP_LIMIT);
    logs[start..].iter().rev().collect()
}

/// Sum of minutes over all app-usage entries.
pub fn total_screen_minutes(usage: &[AppUsage]) -> u64 {
    usage.iter().map(|app| app.minutes).sum()
}

/// Total screen time as whole hours plus leftover minutes.
pub fn screen_time(usage: &[AppUsage]) -> ScreenTime {
    let total = total_screen_minutes(usage);
    ScreenTime {
        hours: total / 60,
        minutes: total % 60,
    }
}

/// Progress toward a goal as a rounded percentage.
///
/// A non-positive target makes the percentage meaningless and yields 0;
/// `target` is documented as required > 0.
pub fn goal_percent(goal: &Goal) -> i64 {
    if goal.target <= 0.0 {
        return 0;
    }
    (goal.progress / goal.target * 100.0).round() as i64
}

/// First 3 not-yet-completed activities of the selected date.
pub fn upcoming_activities<'a>(
    activities: &'a [Activity],
    selected_date: &str,
) -> Vec<&'a Activity> {
    today_activities(activities, selected_date)
        .into_iter()
        .filter(|activity| !activity.completed)
        .take(UPCOMING_LIMIT)
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
