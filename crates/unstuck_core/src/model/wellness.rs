//! Sleep and screen-time records.
//!
//! # Responsibility
//! - Define the read-mostly wellness slices: sleep logs and app usage.
//!
//! # Invariants
//! - Both slices are seeded once and never mutated by a user-facing
//!   operation in this snapshot.
//! - Duplicate sleep dates are structurally possible and never deduplicated.

use serde::{Deserialize, Serialize};

/// One night of logged sleep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepLog {
    /// Calendar-date string (`YYYY-MM-DD`).
    pub date: String,
    /// Hours slept, non-negative.
    pub hours: f64,
    /// Subjective quality score, conventionally 0-10.
    pub quality: f64,
}

/// Accumulated daily screen time for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsage {
    /// Application label.
    pub name: String,
    /// Minutes of use, non-negative.
    pub minutes: u64,
}
