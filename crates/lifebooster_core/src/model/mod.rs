//! Document schema for every tracked life area.
//!
//! # Responsibility
//! - Define the single persisted `Document` and its entity collections.
//! - Keep wire names stable with the stored JSON layout (camelCase keys,
//!   lowercase enum values).
//!
//! # Invariants
//! - Entity ids are unique within their own collection only.
//! - Removal is always a move into `Document::trash`, never a hard delete.
//! - `moods` holds at most one entry per day bucket.

pub mod document;
pub mod ids;
pub mod journal;
pub mod money;
pub mod notification;
pub mod task;
pub mod trash;
pub mod validation;
