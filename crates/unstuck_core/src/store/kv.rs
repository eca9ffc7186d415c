//! Slice key-value contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide a stable load/save API over the `slices` table.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - `save` fully replaces the previous value for a key.
//! - Construction rejects connections that skipped migration bootstrap.

use crate::store::migrations::latest_version;
use crate::store::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

const SLICES_TABLE: &str = "slices";

/// Store interface the service layer is written against.
///
/// Each key holds one independently persisted slice as raw text. The trait
/// keeps callers agnostic of the backing engine.
pub trait KvStore {
    /// Returns the raw text stored under `key`, if the key was ever saved.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value stored under `key` with `value`.
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed slice store.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a migrated connection after verifying its schema state.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations never ran.
    /// - `UnsupportedSchemaVersion` when the store was written by a newer
    ///   binary.
    /// - `MissingRequiredTable` when the schema version claims readiness but
    ///   the `slices` table is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;

        if actual_version == 0 {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        if actual_version > expected_version {
            return Err(StoreError::UnsupportedSchemaVersion {
                store_version: actual_version,
                latest_supported: expected_version,
            });
        }

        let table_present = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [SLICES_TABLE],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .is_some();
        if !table_present {
            return Err(StoreError::MissingRequiredTable(SLICES_TABLE));
        }

        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slices WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slices (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
