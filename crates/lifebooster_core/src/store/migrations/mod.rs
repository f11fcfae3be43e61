//! Schema steps for the storage file.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - Pending steps run in one transaction; the reached version is mirrored to
//!   `PRAGMA user_version`.
//! - A file stamped with a newer version than this build knows is refused,
//!   so an older app never rewrites a document it cannot fully decode.

use crate::store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    sql: include_str!("0001_kv_store.sql"),
}];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Version stamped on `conn`, `0` for a brand-new file.
pub fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is newer than this build.
/// - `MigrationFailed` naming the step whose SQL was rejected; nothing from
///   the failed run is committed.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let found = current_user_version(conn)?;
    let latest = latest_version();
    if found > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            found,
            supported: latest,
        });
    }
    if found == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in SCHEMA_STEPS.iter().filter(|step| step.version > found) {
        tx.execute_batch(step.sql)
            .and_then(|()| tx.pragma_update(None, "user_version", step.version))
            .map_err(|source| StoreError::MigrationFailed {
                version: step.version,
                source,
            })?;
    }
    tx.commit()?;

    info!("event=schema_migrate module=store status=ok from_version={found} to_version={latest}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, current_user_version, latest_version, SCHEMA_STEPS};
    use rusqlite::Connection;

    #[test]
    fn steps_are_strictly_increasing() {
        assert!(SCHEMA_STEPS
            .windows(2)
            .all(|pair| pair[0].version < pair[1].version));
    }

    #[test]
    fn fresh_connection_reaches_latest_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(current_user_version(&conn).unwrap(), 0);

        apply_migrations(&mut conn).unwrap();
        apply_migrations(&mut conn).unwrap();
        assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    }
}
