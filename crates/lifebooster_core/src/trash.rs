//! Soft-delete subsystem: move to trash, restore, purge.
//!
//! # Responsibility
//! - Move entities between their home collection and `Document::trash`.
//! - Dispatch on `TrashKind` so each payload returns to the right home.
//!
//! # Invariants
//! - An entity is in exactly one of {home collection, trash}; each operation
//!   produces one new document, never an intermediate state.
//! - Trash entries are matched by kind and id together, so equal ids in
//!   different collections never target each other.
//! - Restore appends to the home collection; purge touches only `trash`.

use crate::model::document::Document;
use crate::model::trash::{TrashItem, TrashKey, TrashKind, TrashedEntity};
use crate::reducer::{prepend, take_by_id, ReduceError, ReduceResult};
use chrono::{DateTime, Utc};

/// Moves the entity addressed by `key` from its home collection into trash.
///
/// # Errors
/// - `NotFound` when the home collection has no entity with that id.
pub fn move_to_trash(
    doc: &Document,
    key: &TrashKey,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    let mut next = doc.clone();
    let entity = match key.kind {
        TrashKind::Task => {
            let (item, rest) = take_by_id(&doc.tasks, "tasks", &key.id)?;
            next.tasks = rest;
            TrashedEntity::Task(item)
        }
        TrashKind::Expense => {
            let (item, rest) = take_by_id(&doc.expenses, "expenses", &key.id)?;
            next.expenses = rest;
            TrashedEntity::Expense(item)
        }
        TrashKind::Income => {
            let (item, rest) = take_by_id(&doc.incomes, "incomes", &key.id)?;
            next.incomes = rest;
            TrashedEntity::Income(item)
        }
        TrashKind::Loan => {
            let (item, rest) = take_by_id(&doc.loans, "loans", &key.id)?;
            next.loans = rest;
            TrashedEntity::Loan(item)
        }
        TrashKind::Challenge => {
            let (item, rest) = take_by_id(&doc.challenges, "challenges", &key.id)?;
            next.challenges = rest;
            TrashedEntity::Challenge(item)
        }
        TrashKind::Mistake => {
            let (item, rest) = take_by_id(&doc.mistakes, "mistakes", &key.id)?;
            next.mistakes = rest;
            TrashedEntity::Mistake(item)
        }
    };

    next.trash = prepend(
        TrashItem {
            entity,
            deleted_at: now,
        },
        &doc.trash,
    );
    Ok(next)
}

/// Takes the entry addressed by `key` out of trash and appends its entity to
/// the end of its home collection.
///
/// # Errors
/// - `NotInTrash` when no entry matches.
pub fn restore_from_trash(doc: &Document, key: &TrashKey) -> ReduceResult<Document> {
    let position = position_of(&doc.trash, key)?;
    let mut next = doc.clone();
    let item = next.trash.remove(position);
    match item.entity {
        TrashedEntity::Task(task) => next.tasks.push(task),
        TrashedEntity::Expense(expense) => next.expenses.push(expense),
        TrashedEntity::Income(income) => next.incomes.push(income),
        TrashedEntity::Loan(loan) => next.loans.push(loan),
        TrashedEntity::Challenge(challenge) => next.challenges.push(challenge),
        TrashedEntity::Mistake(mistake) => next.mistakes.push(mistake),
    }
    Ok(next)
}

/// Permanently removes the entry addressed by `key`.
///
/// Unconditional: confirmation belongs to the caller.
pub fn purge(doc: &Document, key: &TrashKey) -> ReduceResult<Document> {
    let position = position_of(&doc.trash, key)?;
    let mut trash = doc.trash.clone();
    trash.remove(position);
    Ok(Document {
        trash,
        ..doc.clone()
    })
}

/// Permanently removes every trash entry.
pub fn empty_trash(doc: &Document) -> Document {
    Document {
        trash: Vec::new(),
        ..doc.clone()
    }
}

/// Finds the entry addressed by `key`.
pub fn find<'a>(trash: &'a [TrashItem], key: &TrashKey) -> Option<&'a TrashItem> {
    trash.iter().find(|item| item.matches(key))
}

/// Entries that came from the `kind` collection, newest deletion first.
pub fn entries_of(trash: &[TrashItem], kind: TrashKind) -> Vec<&TrashItem> {
    trash.iter().filter(|item| item.kind() == kind).collect()
}

fn position_of(trash: &[TrashItem], key: &TrashKey) -> ReduceResult<usize> {
    trash
        .iter()
        .position(|item| item.matches(key))
        .ok_or_else(|| ReduceError::NotInTrash(key.clone()))
}
