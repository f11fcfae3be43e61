//! SQLite-backed document slot.
//!
//! # Invariants
//! - The connection must come from `store::open_db*` (fully migrated).
//! - One row per key; writes replace the whole row.

use crate::store::migrations::{current_user_version, latest_version};
use crate::store::{DocumentStore, StoreError, StoreResult, STORAGE_KEY};
use rusqlite::{params, Connection, OptionalExtension};

const REQUIRED_TABLE: &str = "kv_store";

/// Document slot stored as one row of `kv_store`.
pub struct SqliteDocumentStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteDocumentStore<'conn> {
    /// Uses the default `lifebooster_data` key.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when `kv_store` is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Self::with_key(conn, STORAGE_KEY)
    }

    /// Uses a caller-provided key, e.g. for side-by-side profiles in tests.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self {
            conn,
            key: key.into(),
        })
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }
}

impl DocumentStore for SqliteDocumentStore<'_> {
    fn read_blob(&self) -> StoreResult<Option<String>> {
        let blob = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(blob)
    }

    fn write_blob(&self, blob: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), blob],
        )?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [self.key.as_str()])?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [REQUIRED_TABLE],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(StoreError::MissingRequiredTable(REQUIRED_TABLE));
    }

    Ok(())
}
