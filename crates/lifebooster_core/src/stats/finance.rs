//! Balance, cash-flow split and loan positions.
//!
//! # Invariants
//! - Balance spans all history; it is not scoped to a period.
//! - Paid loans never count toward outstanding totals.

use crate::model::ids::{DayBucket, EntityId};
use crate::model::money::{Expense, Income, Loan, LoanType};
use chrono::{DateTime, TimeZone, Utc};

/// Direction of a merged cash-flow row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Expense,
    Income,
}

impl Flow {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

/// One row of the merged transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction<'a> {
    pub flow: Flow,
    pub id: &'a EntityId,
    pub amount: f64,
    pub description: &'a str,
    pub date: DateTime<Utc>,
}

/// Percent shares of total cash volume.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowSplit {
    pub income_percent: f64,
    pub expense_percent: f64,
}

/// Time elapsed between a loan's creation and its due date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanProgress {
    /// Elapsed fraction, clamped to `0.0..=1.0`.
    pub fraction: f64,
    /// Past due and still unpaid.
    pub overdue: bool,
}

pub fn total_income(incomes: &[Income]) -> f64 {
    incomes.iter().map(|income| income.amount).sum()
}

pub fn total_expense(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// All-time income minus all-time expenses.
pub fn balance(incomes: &[Income], expenses: &[Expense]) -> f64 {
    total_income(incomes) - total_expense(expenses)
}

/// Sum of unpaid loans of one direction.
pub fn outstanding_loan_total(loans: &[Loan], kind: LoanType) -> f64 {
    loans
        .iter()
        .filter(|loan| loan.kind == kind && !loan.is_paid)
        .map(|loan| loan.amount)
        .sum()
}

/// Outstanding lent minus outstanding borrowed.
pub fn net_loan_position(loans: &[Loan]) -> f64 {
    outstanding_loan_total(loans, LoanType::Lent) - outstanding_loan_total(loans, LoanType::Borrowed)
}

/// Expenses whose calendar day in `tz` equals `day`.
pub fn spent_on_day<Tz: TimeZone>(expenses: &[Expense], day: DayBucket, tz: &Tz) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.date.with_timezone(tz).date_naive() == day)
        .map(|expense| expense.amount)
        .sum()
}

pub fn income_expense_split(incomes: &[Income], expenses: &[Expense]) -> FlowSplit {
    let income = total_income(incomes);
    let expense = total_expense(expenses);
    let volume = income + expense;
    if volume <= 0.0 {
        return FlowSplit::default();
    }
    FlowSplit {
        income_percent: income / volume * 100.0,
        expense_percent: expense / volume * 100.0,
    }
}

/// Expenses and incomes merged into one history, newest first.
pub fn transactions<'a>(incomes: &'a [Income], expenses: &'a [Expense]) -> Vec<Transaction<'a>> {
    let mut rows: Vec<Transaction<'a>> = expenses
        .iter()
        .map(|expense| Transaction {
            flow: Flow::Expense,
            id: &expense.id,
            amount: expense.amount,
            description: &expense.description,
            date: expense.date,
        })
        .chain(incomes.iter().map(|income| Transaction {
            flow: Flow::Income,
            id: &income.id,
            amount: income.amount,
            description: &income.description,
            date: income.date,
        }))
        .collect();
    rows.sort_by(|left, right| right.date.cmp(&left.date));
    rows
}

/// Returns `None` for loans without a due date. A due date at or before
/// creation reports no elapsed progress.
pub fn loan_progress(loan: &Loan, now: DateTime<Utc>) -> Option<LoanProgress> {
    let due = loan.due_date?;
    let total = (due - loan.created_at).num_milliseconds();
    let fraction = if total <= 0 {
        0.0
    } else {
        let elapsed = (now - loan.created_at).num_milliseconds();
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    };
    Some(LoanProgress {
        fraction,
        overdue: !loan.is_paid && now > due,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        balance, income_expense_split, loan_progress, net_loan_position,
        outstanding_loan_total, spent_on_day, transactions, Flow,
    };
    use crate::model::ids::EntityId;
    use crate::model::money::{Expense, Income, Loan, LoanType};
    use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};

    fn expense(id: &str, amount: f64, hour: u32) -> Expense {
        Expense {
            id: EntityId::new(id),
            amount,
            description: format!("expense {id}"),
            date: Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap(),
        }
    }

    fn income(id: &str, amount: f64, hour: u32) -> Income {
        Income {
            id: EntityId::new(id),
            amount,
            description: format!("income {id}"),
            date: Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap(),
        }
    }

    fn loan(id: &str, amount: f64, kind: LoanType, is_paid: bool) -> Loan {
        Loan {
            id: EntityId::new(id),
            person: "Sam".to_string(),
            amount,
            kind,
            due_date: None,
            is_paid,
            note: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn balance_spans_all_history() {
        let incomes = vec![income("i1", 200.0, 9)];
        let expenses = vec![expense("e1", 50.0, 10), expense("e2", 30.0, 11)];
        assert_eq!(balance(&incomes, &expenses), 120.0);
        assert_eq!(balance(&[], &[]), 0.0);
    }

    #[test]
    fn outstanding_totals_skip_paid_loans() {
        let loans = vec![
            loan("1", 100.0, LoanType::Lent, false),
            loan("2", 40.0, LoanType::Lent, true),
            loan("3", 100.0, LoanType::Lent, false),
            loan("4", 30.0, LoanType::Borrowed, false),
        ];
        assert_eq!(outstanding_loan_total(&loans, LoanType::Lent), 200.0);
        assert_eq!(outstanding_loan_total(&loans, LoanType::Borrowed), 30.0);
        assert_eq!(net_loan_position(&loans), 170.0);
    }

    #[test]
    fn spent_on_day_uses_local_calendar_day() {
        let expenses = vec![expense("e1", 10.0, 1), expense("e2", 5.0, 23)];
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(spent_on_day(&expenses, day, &Utc), 15.0);

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(spent_on_day(&expenses, day, &plus_two), 10.0);
        assert_eq!(spent_on_day(&expenses, day.succ_opt().unwrap(), &plus_two), 5.0);
    }

    #[test]
    fn split_is_zero_without_volume() {
        let split = income_expense_split(&[], &[]);
        assert_eq!(split.income_percent, 0.0);
        assert_eq!(split.expense_percent, 0.0);

        let split = income_expense_split(&[income("i", 75.0, 1)], &[expense("e", 25.0, 2)]);
        assert_eq!(split.income_percent, 75.0);
        assert_eq!(split.expense_percent, 25.0);
    }

    #[test]
    fn transactions_are_merged_newest_first() {
        let incomes = vec![income("i1", 1.0, 12)];
        let expenses = vec![expense("e1", 1.0, 8), expense("e2", 1.0, 20)];
        let rows = transactions(&incomes, &expenses);
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "i1", "e1"]);
        assert_eq!(rows[1].flow, Flow::Income);
    }

    #[test]
    fn loan_progress_is_clamped_and_flags_overdue() {
        let mut lent = loan("1", 10.0, LoanType::Lent, false);
        assert!(loan_progress(&lent, Utc::now()).is_none());

        lent.due_date = Some(lent.created_at + Duration::days(10));
        let halfway = lent.created_at + Duration::days(5);
        let progress = loan_progress(&lent, halfway).unwrap();
        assert!((progress.fraction - 0.5).abs() < 1e-9);
        assert!(!progress.overdue);

        let late = lent.created_at + Duration::days(20);
        let progress = loan_progress(&lent, late).unwrap();
        assert_eq!(progress.fraction, 1.0);
        assert!(progress.overdue);

        lent.is_paid = true;
        assert!(!loan_progress(&lent, late).unwrap().overdue);

        lent.due_date = Some(lent.created_at);
        assert_eq!(loan_progress(&lent, halfway).unwrap().fraction, 0.0);
    }
}
