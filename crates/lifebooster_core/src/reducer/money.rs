//! Expense, income and loan reducers.

use crate::model::document::Document;
use crate::model::ids::EntityId;
use crate::model::money::{Expense, Income, Loan, LoanType};
use crate::model::trash::TrashKind;
use crate::model::validation::{optional_text, parse_amount, require_text};
use crate::reducer::{new_id, prepend, replace_by_id, ReduceResult};
use chrono::{DateTime, Utc};

/// Input for an expense or income entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Raw amount text as typed by the user.
    pub amount: String,
    pub description: String,
}

impl NewTransaction {
    pub fn new(amount: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
        }
    }
}

/// Input for a new loan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub person: String,
    /// Raw amount text as typed by the user.
    pub amount: String,
    pub kind: LoanType,
    pub due_date: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// Prepends an expense stamped with `now`.
pub fn add_expense(
    doc: &Document,
    input: &NewTransaction,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    let expense = Expense {
        id: new_id(now, &doc.expenses, &doc.trash, TrashKind::Expense),
        amount: parse_amount(&input.amount)?,
        description: require_text("description", &input.description)?,
        date: now,
    };
    Ok(Document {
        expenses: prepend(expense, &doc.expenses),
        ..doc.clone()
    })
}

/// Prepends an income stamped with `now`.
pub fn add_income(
    doc: &Document,
    input: &NewTransaction,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    let income = Income {
        id: new_id(now, &doc.incomes, &doc.trash, TrashKind::Income),
        amount: parse_amount(&input.amount)?,
        description: require_text("description", &input.description)?,
        date: now,
    };
    Ok(Document {
        incomes: prepend(income, &doc.incomes),
        ..doc.clone()
    })
}

/// Prepends an unpaid loan created at `now`.
pub fn add_loan(doc: &Document, input: &NewLoan, now: DateTime<Utc>) -> ReduceResult<Document> {
    let loan = Loan {
        id: new_id(now, &doc.loans, &doc.trash, TrashKind::Loan),
        person: require_text("person", &input.person)?,
        amount: parse_amount(&input.amount)?,
        kind: input.kind,
        due_date: input.due_date,
        is_paid: false,
        note: optional_text(input.note.as_deref()),
        created_at: now,
    };
    Ok(Document {
        loans: prepend(loan, &doc.loans),
        ..doc.clone()
    })
}

/// Flips `is_paid` on the loan with `id`.
pub fn toggle_loan_paid(doc: &Document, id: &EntityId) -> ReduceResult<Document> {
    let loans = replace_by_id(&doc.loans, "loans", id, |loan| Loan {
        is_paid: !loan.is_paid,
        ..loan.clone()
    })?;
    Ok(Document {
        loans,
        ..doc.clone()
    })
}
