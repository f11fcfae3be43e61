use chrono::{Duration, NaiveDate, TimeZone, Utc};
use lifebooster_core::model::journal::Mood;
use lifebooster_core::model::money::LoanType;
use lifebooster_core::model::task::Priority;
use lifebooster_core::reducer::journal::{add_mistake, set_mood};
use lifebooster_core::reducer::money::{
    add_expense, add_income, add_loan, toggle_loan_paid, NewLoan, NewTransaction,
};
use lifebooster_core::reducer::tasks::{add_task, toggle_task, NewTask};
use lifebooster_core::stats::finance::{balance, outstanding_loan_total};
use lifebooster_core::stats::productivity::{
    completion_ratio, current_streak, day_health, DayHealth,
};
use lifebooster_core::stats::summary::mood_on;
use lifebooster_core::trash::{move_to_trash, purge, restore_from_trash};
use lifebooster_core::{Document, ReduceError, TrashKey, TrashKind};

fn fresh() -> Document {
    let joined = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Document::initial(joined, "USD", "OP-2000")
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn tick(n: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap() + Duration::milliseconds(n)
}

fn loan(person: &str, amount: &str) -> NewLoan {
    NewLoan {
        person: person.to_string(),
        amount: amount.to_string(),
        kind: LoanType::Lent,
        due_date: None,
        note: None,
    }
}

#[test]
fn completing_every_task_three_days_running_gives_streak_of_three() {
    let mut doc = fresh();
    let mut clock = 0;
    for d in 8..=10 {
        for text in ["Plan", "Do"] {
            clock += 1;
            let input = NewTask::new(text, Priority::Medium, day(d));
            doc = add_task(&doc, &input, tick(clock)).unwrap();
            let id = doc.tasks[0].id.clone();
            doc = toggle_task(&doc, &id).unwrap();
        }
    }

    assert_eq!(current_streak(&doc.tasks, day(10)), 3);
    assert_eq!(day_health(&doc.tasks, day(9)), DayHealth::High);
    assert_eq!(current_streak(&doc.tasks, day(11)), 0);
}

#[test]
fn balance_counts_all_income_minus_all_expenses() {
    let doc = fresh();
    let doc = add_income(&doc, &NewTransaction::new("100", "Salary"), tick(1)).unwrap();
    let doc = add_income(&doc, &NewTransaction::new("50", "Refund"), tick(2)).unwrap();
    let doc = add_expense(&doc, &NewTransaction::new("30", "Bus"), tick(3)).unwrap();

    assert_eq!(balance(&doc.incomes, &doc.expenses), 120.0);
    assert_eq!(doc.expenses[0].description, "Bus");
}

#[test]
fn completion_ratio_follows_toggles() {
    let mut doc = fresh();
    for (n, text) in ["A", "B", "C", "D"].iter().enumerate() {
        let input = NewTask::new(*text, Priority::Low, day(5));
        doc = add_task(&doc, &input, tick(n as i64)).unwrap();
    }
    assert_eq!(completion_ratio(&doc.tasks, day(5)), 0.0);
    assert_eq!(completion_ratio(&doc.tasks, day(6)), 0.0);

    let first = doc.tasks[0].id.clone();
    doc = toggle_task(&doc, &first).unwrap();
    assert_eq!(completion_ratio(&doc.tasks, day(5)), 0.25);

    doc = toggle_task(&doc, &first).unwrap();
    assert_eq!(completion_ratio(&doc.tasks, day(5)), 0.0);
}

#[test]
fn paid_loans_drop_out_of_outstanding_total() {
    let doc = fresh();
    let doc = add_loan(&doc, &loan("Omar", "100"), tick(1)).unwrap();
    let doc = add_loan(&doc, &loan("Sara", "100"), tick(2)).unwrap();
    let doc = add_loan(&doc, &loan("Ali", "50"), tick(3)).unwrap();
    let paid = doc.loans[0].id.clone();
    let doc = toggle_loan_paid(&doc, &paid).unwrap();

    assert_eq!(outstanding_loan_total(&doc.loans, LoanType::Lent), 200.0);
    assert_eq!(outstanding_loan_total(&doc.loans, LoanType::Borrowed), 0.0);
}

#[test]
fn invalid_amount_leaves_document_unchanged() {
    let doc = fresh();
    for raw in ["abc", "", "-5", "NaN", "inf"] {
        let err = add_expense(&doc, &NewTransaction::new(raw, "Coffee"), tick(1)).unwrap_err();
        assert!(matches!(err, ReduceError::Validation(_)), "{raw}");
    }
    assert!(doc.expenses.is_empty());
}

#[test]
fn trash_round_trip_conserves_entities() {
    let doc = fresh();
    let doc = add_expense(&doc, &NewTransaction::new("9.99", "Book"), tick(1)).unwrap();
    let doc = add_mistake(&doc, "Forgot receipt", day(10), tick(2)).unwrap();
    let expense_key = TrashKey::new(TrashKind::Expense, doc.expenses[0].id.clone());
    let mistake_key = TrashKey::new(TrashKind::Mistake, doc.mistakes[0].id.clone());

    let trashed = move_to_trash(&doc, &expense_key, tick(3)).unwrap();
    assert!(trashed.expenses.is_empty());
    assert_eq!(trashed.trash.len(), 1);
    assert_eq!(trashed.trash[0].deleted_at, tick(3));

    let restored = restore_from_trash(&trashed, &expense_key).unwrap();
    assert_eq!(restored.expenses, doc.expenses);
    assert!(restored.trash.is_empty());

    let trashed = move_to_trash(&restored, &mistake_key, tick(4)).unwrap();
    let purged = purge(&trashed, &mistake_key).unwrap();
    assert!(purged.mistakes.is_empty());
    assert!(purged.trash.is_empty());
    assert_eq!(
        restore_from_trash(&purged, &mistake_key).unwrap_err(),
        ReduceError::NotInTrash(mistake_key)
    );
}

#[test]
fn mood_is_one_per_day() {
    let doc = set_mood(&fresh(), day(3), Mood::Bad);
    let doc = set_mood(&doc, day(3), Mood::Great);
    let doc = set_mood(&doc, day(4), Mood::Neutral);

    assert_eq!(doc.moods.len(), 2);
    assert_eq!(mood_on(&doc.moods, day(3)), Some(Mood::Great));
}
