//! Cash flow and loan entities.
//!
//! # Invariants
//! - Expenses and incomes live in separate collections; they are merged only
//!   for display.
//! - `Loan::is_paid` is a terminal flag; settled loans stay in the collection
//!   until trashed.

use crate::model::ids::{lenient_timestamp, EntityId, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Money leaving the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    /// Amount in currency units.
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Money entering the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: EntityId,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Identified for Expense {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Income {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Direction of a loan relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    /// The user gave money; someone owes the user.
    Lent,
    /// The user received money; the user owes someone.
    Borrowed,
}

impl LoanType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lent" => Some(Self::Lent),
            "borrowed" => Some(Self::Borrowed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: EntityId,
    pub person: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: LoanType,
    #[serde(
        default,
        with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identified for Loan {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
