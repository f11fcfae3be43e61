//! Pure document reducers.
//!
//! # Responsibility
//! - Build new entities from validated input and prepend them.
//! - Map-and-replace existing entities by id (flag toggles, patches).
//!
//! # Invariants
//! - Reducers take `&Document` and return a new `Document`; the input is
//!   never mutated.
//! - A rejected input leaves no trace: no partial entity is ever added.
//! - New entities go to the front of their collection.

use crate::model::ids::{EntityId, Identified};
use crate::model::trash::{TrashItem, TrashKey, TrashKind};
use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod journal;
pub mod money;
pub mod notifications;
pub mod profile;
pub mod tasks;

pub type ReduceResult<T> = Result<T, ReduceError>;

/// Why a reducer refused to produce a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    Validation(ValidationError),
    /// No entity with `id` in the named collection.
    NotFound {
        collection: &'static str,
        id: EntityId,
    },
    /// No trash entry matches the key.
    NotInTrash(TrashKey),
}

impl Display for ReduceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { collection, id } => write!(f, "{collection} entry not found: {id}"),
            Self::NotInTrash(key) => write!(f, "trash entry not found: {key}"),
        }
    }
}

impl Error for ReduceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } | Self::NotInTrash(_) => None,
        }
    }
}

impl From<ValidationError> for ReduceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Returns `items` with `item` in front.
pub(crate) fn prepend<T: Clone>(item: T, items: &[T]) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next
}

/// Returns a copy of `items` where the first entry with `id` is replaced by
/// `update(entry)`.
pub(crate) fn replace_by_id<T: Identified + Clone>(
    items: &[T],
    collection: &'static str,
    id: &EntityId,
    update: impl FnOnce(&T) -> T,
) -> ReduceResult<Vec<T>> {
    let position = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| ReduceError::NotFound {
            collection,
            id: id.clone(),
        })?;
    let mut next = items.to_vec();
    next[position] = update(&items[position]);
    Ok(next)
}

/// Splits the first entry with `id` out of `items`.
pub(crate) fn take_by_id<T: Identified + Clone>(
    items: &[T],
    collection: &'static str,
    id: &EntityId,
) -> ReduceResult<(T, Vec<T>)> {
    let position = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| ReduceError::NotFound {
            collection,
            id: id.clone(),
        })?;
    let mut rest = items.to_vec();
    let taken = rest.remove(position);
    Ok((taken, rest))
}

/// Fresh id for a `kind` entity, unused by `items` and by trashed entries of
/// the same kind, so a later restore cannot duplicate it.
pub(crate) fn new_id<T: Identified>(
    now: DateTime<Utc>,
    items: &[T],
    trash: &[TrashItem],
    kind: TrashKind,
) -> EntityId {
    let trashed = trash
        .iter()
        .filter(|item| item.kind() == kind)
        .map(|item| item.entity.id());
    EntityId::next_in(now, items.iter().map(Identified::id).chain(trashed))
}

/// Returns `items` with `item` at the end.
pub(crate) fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}
