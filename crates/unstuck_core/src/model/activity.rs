//! Activity domain model.
//!
//! # Responsibility
//! - Define the scheduled-activity record and its constructors.
//!
//! # Invariants
//! - `id` is unique across the whole collection, not just per date.
//! - `completed` starts `false` and is the only field mutated after
//!   creation; removal is a permanent hard delete.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an activity.
///
/// Stored as a string so freshly generated UUIDs coexist with short literal
/// ids installed by the seed dataset.
pub type ActivityId = String;

/// One scheduled entry in the daily routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable unique id assigned at creation.
    pub id: ActivityId,
    /// Non-empty display title.
    pub title: String,
    /// Clock time string (`HH:MM`), no timezone.
    pub time: String,
    /// Completion flag, flipped by the toggle operation.
    pub completed: bool,
    /// Calendar-date string (`YYYY-MM-DD`) this activity belongs to.
    pub date: String,
}

impl Activity {
    /// Creates a new incomplete activity with a generated unique id.
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, time, date)
    }

    /// Creates an incomplete activity with a caller-provided id.
    ///
    /// Used by the seed dataset, where identity is fixed by contract.
    pub fn with_id(
        id: impl Into<ActivityId>,
        title: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time: time.into(),
            completed: false,
            date: date.into(),
        }
    }
}
