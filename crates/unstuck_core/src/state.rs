//! Aggregate application state.
//!
//! # Responsibility
//! - Hold the four slices plus the points counter as one explicit struct.
//!
//! # Invariants
//! - Each slice is exclusively owned by the application process.
//! - `points` never goes below zero; undo paths use saturating arithmetic.

use crate::model::activity::Activity;
use crate::model::goal::Goal;
use crate::model::wellness::{AppUsage, SleepLog};

/// In-memory snapshot of every persisted slice.
///
/// Loaded once at bootstrap and mutated only through the service layer,
/// which persists the affected slice after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub activities: Vec<Activity>,
    pub sleep_logs: Vec<SleepLog>,
    pub app_usage: Vec<AppUsage>,
    pub goals: Vec<Goal>,
    pub points: u64,
}
