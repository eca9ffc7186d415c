//! Key-value slice storage bootstrap and error taxonomy.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing the slice store.
//! - Apply schema migrations in deterministic order.
//! - Define the stable slice key names used by every caller.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write slice data before migrations succeed.
//! - Slice key names are a stable external contract and never change.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod migrations;
mod open;

pub use kv::{KvStore, SqliteKvStore};
pub use open::{open_store, open_store_in_memory};

/// Slice key holding the activity collection as a JSON array.
pub const ACTIVITIES_KEY: &str = "unstuck_activities";
/// Slice key holding the sleep log collection as a JSON array.
pub const SLEEP_KEY: &str = "unstuck_sleep";
/// Slice key holding the app-usage collection as a JSON array.
pub const APPS_KEY: &str = "unstuck_apps";
/// Slice key holding the goal collection as a JSON array.
pub const GOALS_KEY: &str = "unstuck_goals";
/// Slice key holding the points counter as a decimal integer string.
pub const POINTS_KEY: &str = "unstuck_points";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for slice persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        store_version: u32,
        latest_supported: u32,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                store_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {store_version} is newer than supported {latest_supported}"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store connection is not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "store is missing required table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
