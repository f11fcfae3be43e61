//! Trash (archive) entries.
//!
//! # Responsibility
//! - Wrap exactly one deleted entity of any trashable kind.
//! - Keep the stored `{type, data, deletedAt}` wire shape while exposing a
//!   typed payload to Rust callers.
//!
//! # Invariants
//! - The `type` tag always agrees with the payload variant.
//! - Entries are addressed by `TrashKey` (kind + id), never by id alone.

use crate::model::ids::{EntityId, Identified};
use crate::model::journal::{Challenge, Mistake};
use crate::model::money::{Expense, Income, Loan};
use crate::model::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Home collection a trashed entity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashKind {
    Task,
    Expense,
    Income,
    Loan,
    Challenge,
    Mistake,
}

impl TrashKind {
    pub const ALL: [TrashKind; 6] = [
        Self::Task,
        Self::Expense,
        Self::Income,
        Self::Loan,
        Self::Challenge,
        Self::Mistake,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Loan => "loan",
            Self::Challenge => "challenge",
            Self::Mistake => "mistake",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl Display for TrashKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deleted entity payload, one variant per trashable kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TrashedEntity {
    Task(Task),
    Expense(Expense),
    Income(Income),
    Loan(Loan),
    Challenge(Challenge),
    Mistake(Mistake),
}

impl TrashedEntity {
    pub fn kind(&self) -> TrashKind {
        match self {
            Self::Task(_) => TrashKind::Task,
            Self::Expense(_) => TrashKind::Expense,
            Self::Income(_) => TrashKind::Income,
            Self::Loan(_) => TrashKind::Loan,
            Self::Challenge(_) => TrashKind::Challenge,
            Self::Mistake(_) => TrashKind::Mistake,
        }
    }

    pub fn key(&self) -> TrashKey {
        TrashKey::new(self.kind(), self.id().clone())
    }
}

impl Identified for TrashedEntity {
    fn id(&self) -> &EntityId {
        match self {
            Self::Task(item) => item.id(),
            Self::Expense(item) => item.id(),
            Self::Income(item) => item.id(),
            Self::Loan(item) => item.id(),
            Self::Challenge(item) => item.id(),
            Self::Mistake(item) => item.id(),
        }
    }
}

/// Address of one entity across home collections and trash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrashKey {
    pub kind: TrashKind,
    pub id: EntityId,
}

impl TrashKey {
    pub fn new(kind: TrashKind, id: impl Into<EntityId>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl Display for TrashKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// One archived entity with its deletion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredTrashItem", into = "StoredTrashItem")]
pub struct TrashItem {
    pub entity: TrashedEntity,
    pub deleted_at: DateTime<Utc>,
}

impl TrashItem {
    pub fn kind(&self) -> TrashKind {
        self.entity.kind()
    }

    pub fn key(&self) -> TrashKey {
        self.entity.key()
    }

    pub fn matches(&self, key: &TrashKey) -> bool {
        self.kind() == key.kind && self.entity.id() == &key.id
    }
}

/// Wire shape: the payload stays untyped until the tag is known.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTrashItem {
    #[serde(rename = "type")]
    kind: TrashKind,
    data: serde_json::Value,
    deleted_at: DateTime<Utc>,
}

impl TryFrom<StoredTrashItem> for TrashItem {
    type Error = serde_json::Error;

    fn try_from(stored: StoredTrashItem) -> Result<Self, Self::Error> {
        let data = stored.data;
        let entity = match stored.kind {
            TrashKind::Task => TrashedEntity::Task(serde_json::from_value(data)?),
            TrashKind::Expense => TrashedEntity::Expense(serde_json::from_value(data)?),
            TrashKind::Income => TrashedEntity::Income(serde_json::from_value(data)?),
            TrashKind::Loan => TrashedEntity::Loan(serde_json::from_value(data)?),
            TrashKind::Challenge => TrashedEntity::Challenge(serde_json::from_value(data)?),
            TrashKind::Mistake => TrashedEntity::Mistake(serde_json::from_value(data)?),
        };
        Ok(Self {
            entity,
            deleted_at: stored.deleted_at,
        })
    }
}

impl From<TrashItem> for StoredTrashItem {
    fn from(item: TrashItem) -> Self {
        let kind = item.kind();
        let data = match item.entity {
            TrashedEntity::Task(value) => serde_json::to_value(value),
            TrashedEntity::Expense(value) => serde_json::to_value(value),
            TrashedEntity::Income(value) => serde_json::to_value(value),
            TrashedEntity::Loan(value) => serde_json::to_value(value),
            TrashedEntity::Challenge(value) => serde_json::to_value(value),
            TrashedEntity::Mistake(value) => serde_json::to_value(value),
        }
        // Entity structs only hold strings, numbers, bools and dates.
        .unwrap_or(serde_json::Value::Null);
        Self {
            kind,
            data,
            deleted_at: item.deleted_at,
        }
    }
}
