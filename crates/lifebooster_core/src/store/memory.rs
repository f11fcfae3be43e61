//! In-process document slot.

use crate::store::{DocumentStore, StoreResult};
use std::cell::RefCell;

/// Slot kept in memory; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    blob: RefCell<Option<String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `blob` already stored, as if written by an older build.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read_blob(&self) -> StoreResult<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write_blob(&self, blob: &str) -> StoreResult<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.blob.borrow_mut().take();
        Ok(())
    }
}
