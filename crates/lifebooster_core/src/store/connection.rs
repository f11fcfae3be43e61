//! Opening the storage file that holds the document slot.
//!
//! # Invariants
//! - Returned connections are fully migrated.
//! - Every open attempt ends in exactly one `store_open` event with status
//!   `ok` or `error`.

use crate::store::migrations::apply_migrations;
use crate::store::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating when missing) the storage file at `path`.
pub fn open_db(path: impl AsRef<Path>) -> StoreResult<Connection> {
    open_with(StoreMedium::File, || Connection::open(path))
}

/// Opens a throwaway in-memory store for tests and ephemeral sessions.
pub fn open_db_in_memory() -> StoreResult<Connection> {
    open_with(StoreMedium::Memory, Connection::open_in_memory)
}

#[derive(Clone, Copy)]
enum StoreMedium {
    File,
    Memory,
}

impl StoreMedium {
    fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

fn open_with(
    medium: StoreMedium,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started = Instant::now();
    let result = connect()
        .map_err(StoreError::from)
        .and_then(|mut conn| prepare(&mut conn).map(|()| conn));

    let medium = medium.as_str();
    let elapsed_ms = started.elapsed().as_millis();
    match &result {
        Ok(_) => info!("event=store_open module=store status=ok medium={medium} duration_ms={elapsed_ms}"),
        Err(err) => error!(
            "event=store_open module=store status=error medium={medium} duration_ms={elapsed_ms} error_code={} error={err}",
            err.code()
        ),
    }
    result
}

fn prepare(conn: &mut Connection) -> StoreResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)
}
