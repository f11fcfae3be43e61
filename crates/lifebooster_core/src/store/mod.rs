//! Persistence adapter for the single application document.
//!
//! # Responsibility
//! - Read and write the whole document as one JSON blob under one key.
//! - Turn absent or corrupt blobs into "no document" instead of errors.
//! - Run the load-time upgrade before handing a document to callers.
//! - Open and migrate the SQLite file behind the slot.
//!
//! # Invariants
//! - `save` always overwrites the full blob; there are no partial writes.
//! - `load` never returns an error; failures are logged and reported as
//!   `None` so the caller can substitute a fresh document. `load_outcome`
//!   keeps the reason for callers that must not overwrite on a failed read.
//! - Log lines carry sizes and error categories only, never document text.

use crate::model::document::Document;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod connection;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod upgrade;

pub use connection::{open_db, open_db_in_memory};
pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;
pub use upgrade::{upgrade, StoredDocument, UpgradeContext, UpgradeReport};

/// Storage key holding the serialized document.
pub const STORAGE_KEY: &str = "lifebooster_data";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The storage file was written by a newer build.
    UnsupportedSchemaVersion {
        found: u32,
        supported: u32,
    },
    /// A schema step failed; the file stays at its previous version.
    MigrationFailed {
        version: u32,
        source: rusqlite::Error,
    },
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl StoreError {
    /// Stable short code for `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::UnsupportedSchemaVersion { .. } => "schema_too_new",
            Self::MigrationFailed { .. } => "migration_failed",
            Self::Serialize(_) => "serialize_failed",
            Self::UninitializedConnection { .. } => "not_migrated",
            Self::MissingRequiredTable(_) => "missing_table",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "storage file has schema version {found}; this build supports up to {supported}"
            ),
            Self::MigrationFailed { version, source } => {
                write!(f, "schema step {version} failed: {source}")
            }
            Self::Serialize(err) => write!(f, "document serialization failed: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "storage connection is not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table missing: {table}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::MigrationFailed { source: err, .. } => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. }
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Result of reading the slot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Document),
    /// Nothing stored yet.
    Empty,
    /// A blob exists but does not decode as a document.
    Corrupt,
    /// The storage medium itself failed; the blob may still be intact.
    Unreadable,
}

impl LoadOutcome {
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Loaded(document) => Some(document),
            Self::Empty | Self::Corrupt | Self::Unreadable => None,
        }
    }
}

/// Key-value slot holding the serialized document.
pub trait DocumentStore {
    /// Returns the raw blob, or `None` when nothing was stored yet.
    fn read_blob(&self) -> StoreResult<Option<String>>;

    /// Replaces the stored blob.
    fn write_blob(&self, blob: &str) -> StoreResult<()>;

    /// Removes the stored blob entirely.
    fn clear(&self) -> StoreResult<()>;

    /// Reads, parses and upgrades the stored document.
    fn load(&self, ctx: &UpgradeContext<'_>) -> Option<Document> {
        self.load_outcome(ctx).into_document()
    }

    /// Like [`DocumentStore::load`], but tells an empty slot, a corrupt blob
    /// and a failed read apart.
    fn load_outcome(&self, ctx: &UpgradeContext<'_>) -> LoadOutcome {
        load_document(self, ctx)
    }

    /// Serializes `document` and overwrites the slot.
    fn save(&self, document: &Document) -> StoreResult<()> {
        let blob = serde_json::to_string(document).map_err(StoreError::Serialize)?;
        self.write_blob(&blob)?;
        debug!(
            "event=doc_save module=store status=ok bytes={}",
            blob.len()
        );
        Ok(())
    }
}

fn load_document<S: DocumentStore + ?Sized>(
    store: &S,
    ctx: &UpgradeContext<'_>,
) -> LoadOutcome {
    let blob = match store.read_blob() {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!("event=doc_load module=store status=empty");
            return LoadOutcome::Empty;
        }
        Err(err) => {
            warn!("event=doc_load module=store status=error error_code=read_failed error={err}");
            return LoadOutcome::Unreadable;
        }
    };

    let stored = match serde_json::from_str::<StoredDocument>(&blob) {
        Ok(stored) => stored,
        Err(err) => {
            warn!(
                "event=doc_load module=store status=error error_code=parse_failed category={:?} line={} column={} bytes={}",
                err.classify(),
                err.line(),
                err.column(),
                blob.len()
            );
            return LoadOutcome::Corrupt;
        }
    };

    let (document, report) = upgrade(stored, ctx);
    info!(
        "event=doc_load module=store status=ok bytes={} upgraded={}",
        blob.len(),
        !report.is_noop()
    );
    for step in &report.applied {
        debug!("event=doc_upgrade module=store step={step}");
    }
    LoadOutcome::Loaded(document)
}
