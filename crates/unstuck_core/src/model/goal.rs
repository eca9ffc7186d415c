//! Goal domain model.

use serde::{Deserialize, Serialize};

/// A long-running objective with numeric progress toward a target.
///
/// `target` is required to be greater than zero for percentage math to be
/// meaningful; `progress` may exceed or fall short of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Stable unique id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Current progress value.
    pub progress: f64,
    /// Target value, expected > 0.
    pub target: f64,
}
