//! Flutter-facing entry points over the core session.
//!
//! # Responsibility
//! - Expose one sync function per user action, each running a full
//!   open, apply, save cycle against the configured store.
//! - Flatten results into plain envelopes the Dart side can render.
//! - Serve read-only list views (day tasks, trash, transactions) as rows.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Entry calls are serialized in-process; there is a single writer.
//! - Failure messages name the operation, never user-entered text.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use lifebooster_core::model::document::Gender;
use lifebooster_core::model::ids::parse_timestamp;
use lifebooster_core::model::journal::Mood;
use lifebooster_core::model::money::LoanType;
use lifebooster_core::model::notification::NotificationKind;
use lifebooster_core::model::task::{Priority, Task};
use lifebooster_core::model::trash::{TrashItem, TrashedEntity};
use lifebooster_core::reducer::journal::{add_challenge, add_mistake, set_mood, toggle_challenge};
use lifebooster_core::reducer::money::{
    add_expense, add_income, add_loan, toggle_loan_paid, NewLoan, NewTransaction,
};
use lifebooster_core::reducer::notifications::{
    mark_all_notifications_read, mark_notification_read, push_notification, NewNotification,
};
use lifebooster_core::reducer::profile::{complete_onboarding, update_profile, ProfilePatch};
use lifebooster_core::reducer::tasks::{add_task, toggle_task, NewTask};
use lifebooster_core::stats::finance::{outstanding_loan_total, transactions, Transaction};
use lifebooster_core::stats::productivity::tasks_for_day_sorted;
use lifebooster_core::stats::summary::{daily_summary, unread_notifications};
use lifebooster_core::store::open_db;
use lifebooster_core::trash::{move_to_trash, purge, restore_from_trash};
use lifebooster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Document, EntityId, Environment, LifeSession, SqliteDocumentStore, TrashKey, TrashKind,
};
use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

const STORE_FILE_NAME: &str = "lifebooster.sqlite3";
const STORE_PATH_ENV: &str = "LIFEBOOSTER_DB_PATH";

static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();
static ENTRY_LOCK: Mutex<()> = Mutex::new(());

type Session<'conn> = LifeSession<SqliteDocumentStore<'conn>>;

/// Health check for bridge smoke tests.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Starts rolling file logs under the absolute directory `log_dir`.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns an empty string on success, otherwise the failure reason.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(&level, &log_dir) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Pins the store file used by every later entry call.
///
/// Must run before the first entry call; afterwards the path is fixed for
/// the process. Returns an empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_store_path(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "store path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = STORE_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!("store path already fixed at `{}`", active.display())
    }
}

/// Outcome of one mutating entry call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    pub ok: bool,
    /// Id of the created or touched entity, when there is one.
    pub entity_id: Option<String>,
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, entity_id: Option<String>) -> Self {
        Self {
            ok: true,
            entity_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entity_id: None,
            message: message.into(),
        }
    }
}

/// Home-screen figures for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResponse {
    pub ok: bool,
    pub message: String,
    pub day: String,
    pub name: String,
    pub currency: String,
    pub has_onboarded: bool,
    pub tasks_done: u32,
    pub tasks_total: u32,
    pub completion_ratio: f64,
    pub streak: u32,
    pub spent_today: f64,
    pub balance: f64,
    pub mood: Option<String>,
    pub outstanding_lent: f64,
    pub outstanding_borrowed: f64,
    pub unread_notifications: u32,
    pub trash_count: u32,
}

impl DashboardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            day: String::new(),
            name: String::new(),
            currency: String::new(),
            has_onboarded: false,
            tasks_done: 0,
            tasks_total: 0,
            completion_ratio: 0.0,
            streak: 0,
            spent_today: 0.0,
            balance: 0.0,
            mood: None,
            outstanding_lent: 0.0,
            outstanding_borrowed: 0.0,
            unread_notifications: 0,
            trash_count: 0,
        }
    }
}

/// One task row of a day view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: String,
    pub date: String,
    pub time: Option<String>,
}

/// Day tasks, open first and then by priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<TaskItem>,
}

/// One trash row; `kind` and `id` together address it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashEntryItem {
    pub kind: String,
    pub id: String,
    /// Task text, description, person or lesson shown in the archive list.
    pub label: String,
    pub deleted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<TrashEntryItem>,
}

/// One row of the merged income/expense history.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionItem {
    /// `income` or `expense`.
    pub flow: String,
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
}

/// Transactions, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<TransactionItem>,
}

/// Adds a task under `date` (`YYYY-MM-DD`, defaults to today).
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_task(
    text: String,
    priority: String,
    date: Option<String>,
    time: Option<String>,
) -> EntryActionResponse {
    let result = parse_priority(&priority).and_then(|priority| {
        let date = parse_day_or_today(date.as_deref())?;
        let input = NewTask {
            time,
            ..NewTask::new(text, priority, date)
        };
        with_session(|session| {
            let doc = session
                .apply(|doc| add_task(doc, &input, Utc::now()))
                .map_err(|err| err.to_string())?;
            Ok(doc.tasks.first().map(|task| task.id.to_string()))
        })
    });
    respond("entry_add_task", "Task added.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_toggle_task(id: String) -> EntryActionResponse {
    let id = EntityId::new(id);
    let result = with_session(|session| {
        session
            .apply(|doc| toggle_task(doc, &id))
            .map_err(|err| err.to_string())?;
        Ok(Some(id.to_string()))
    });
    respond("entry_toggle_task", "Task toggled.", result)
}

/// Records an expense; `amount` is the raw text typed by the user.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_expense(amount: String, description: String) -> EntryActionResponse {
    let input = NewTransaction::new(amount, description);
    let result = with_session(|session| {
        let doc = session
            .apply(|doc| add_expense(doc, &input, Utc::now()))
            .map_err(|err| err.to_string())?;
        Ok(doc.expenses.first().map(|item| item.id.to_string()))
    });
    respond("entry_add_expense", "Expense added.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_income(amount: String, description: String) -> EntryActionResponse {
    let input = NewTransaction::new(amount, description);
    let result = with_session(|session| {
        let doc = session
            .apply(|doc| add_income(doc, &input, Utc::now()))
            .map_err(|err| err.to_string())?;
        Ok(doc.incomes.first().map(|item| item.id.to_string()))
    });
    respond("entry_add_income", "Income added.", result)
}

/// Records a loan; `kind` is `lent` or `borrowed`, `due_date` RFC 3339 or
/// `YYYY-MM-DD`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_loan(
    person: String,
    amount: String,
    kind: String,
    due_date: Option<String>,
    note: Option<String>,
) -> EntryActionResponse {
    let result = parse_loan_type(&kind).and_then(|kind| {
        let due_date = match due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_timestamp(raw).ok_or("invalid due date")?),
        };
        let input = NewLoan {
            person,
            amount,
            kind,
            due_date,
            note,
        };
        with_session(|session| {
            let doc = session
                .apply(|doc| add_loan(doc, &input, Utc::now()))
                .map_err(|err| err.to_string())?;
            Ok(doc.loans.first().map(|loan| loan.id.to_string()))
        })
    });
    respond("entry_add_loan", "Loan added.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_toggle_loan_paid(id: String) -> EntryActionResponse {
    let id = EntityId::new(id);
    let result = with_session(|session| {
        session
            .apply(|doc| toggle_loan_paid(doc, &id))
            .map_err(|err| err.to_string())?;
        Ok(Some(id.to_string()))
    });
    respond("entry_toggle_loan_paid", "Loan updated.", result)
}

/// Sets the mood for `date` (defaults to today), replacing any earlier one.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_set_mood(mood: String, date: Option<String>) -> EntryActionResponse {
    let result = Mood::parse(&mood)
        .ok_or_else(|| "unknown mood".to_string())
        .and_then(|mood| {
            let date = parse_day_or_today(date.as_deref())?;
            with_session(|session| {
                session.update(|doc| set_mood(doc, date, mood));
                Ok(None)
            })
        });
    respond("entry_set_mood", "Mood saved.", result)
}

/// Moves an entity into trash; `kind` names its home collection.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_move_to_trash(kind: String, id: String) -> EntryActionResponse {
    let result = parse_trash_key(&kind, id).and_then(|key| {
        with_session(|session| {
            session
                .apply(|doc| move_to_trash(doc, &key, Utc::now()))
                .map_err(|err| err.to_string())?;
            Ok(Some(key.id.to_string()))
        })
    });
    respond("entry_move_to_trash", "Moved to trash.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_restore_from_trash(kind: String, id: String) -> EntryActionResponse {
    let result = parse_trash_key(&kind, id).and_then(|key| {
        with_session(|session| {
            session
                .apply(|doc| restore_from_trash(doc, &key))
                .map_err(|err| err.to_string())?;
            Ok(Some(key.id.to_string()))
        })
    });
    respond("entry_restore_from_trash", "Restored.", result)
}

/// Permanently deletes one trash entry. The caller confirms first.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_purge(kind: String, id: String) -> EntryActionResponse {
    let result = parse_trash_key(&kind, id).and_then(|key| {
        with_session(|session| {
            session
                .apply(|doc| purge(doc, &key))
                .map_err(|err| err.to_string())?;
            Ok(Some(key.id.to_string()))
        })
    });
    respond("entry_purge", "Deleted permanently.", result)
}

/// Finishes first-run setup with the user's display name.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_complete_onboarding(name: String) -> EntryActionResponse {
    let result = with_session(|session| {
        session
            .apply(|doc| complete_onboarding(doc, &name, Utc::now()))
            .map_err(|err| err.to_string())?;
        Ok(None)
    });
    respond("entry_complete_onboarding", "Welcome aboard.", result)
}

/// Updates profile settings; `None` leaves a field alone.
///
/// An empty `profile_image` or `cover_image` removes that image.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_update_profile(
    name: Option<String>,
    gender: Option<String>,
    currency: Option<String>,
    profile_image: Option<String>,
    cover_image: Option<String>,
) -> EntryActionResponse {
    let gender = match gender.as_deref() {
        None => Ok(None),
        Some(raw) => Gender::parse(raw)
            .map(Some)
            .ok_or_else(|| "gender must be male|female".to_string()),
    };
    let result = gender.and_then(|gender| {
        let patch = ProfilePatch {
            name,
            gender,
            currency,
            profile_image: profile_image.map(Some),
            cover_image: cover_image.map(Some),
        };
        with_session(|session| {
            session
                .apply(|doc| update_profile(doc, &patch))
                .map_err(|err| err.to_string())?;
            Ok(None)
        })
    });
    respond("entry_update_profile", "Profile saved.", result)
}

/// Adds a long-term goal under `date` (defaults to today).
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_challenge(text: String, date: Option<String>) -> EntryActionResponse {
    let result = parse_day_or_today(date.as_deref()).and_then(|date| {
        with_session(|session| {
            let doc = session
                .apply(|doc| add_challenge(doc, &text, date, Utc::now()))
                .map_err(|err| err.to_string())?;
            Ok(doc.challenges.first().map(|item| item.id.to_string()))
        })
    });
    respond("entry_add_challenge", "Goal added.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_toggle_challenge(id: String) -> EntryActionResponse {
    let id = EntityId::new(id);
    let result = with_session(|session| {
        session
            .apply(|doc| toggle_challenge(doc, &id))
            .map_err(|err| err.to_string())?;
        Ok(Some(id.to_string()))
    });
    respond("entry_toggle_challenge", "Goal toggled.", result)
}

/// Logs a lesson learned under `date` (defaults to today).
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_mistake(text: String, date: Option<String>) -> EntryActionResponse {
    let result = parse_day_or_today(date.as_deref()).and_then(|date| {
        with_session(|session| {
            let doc = session
                .apply(|doc| add_mistake(doc, &text, date, Utc::now()))
                .map_err(|err| err.to_string())?;
            Ok(doc.mistakes.first().map(|item| item.id.to_string()))
        })
    });
    respond("entry_add_mistake", "Lesson saved.", result)
}

/// Appends an unread notification; `kind` is `info|success|warning|error`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_push_notification(
    title: String,
    message: String,
    kind: String,
) -> EntryActionResponse {
    let result = NotificationKind::parse(&kind)
        .ok_or_else(|| "kind must be info|success|warning|error".to_string())
        .and_then(|kind| {
            let input = NewNotification {
                title,
                message,
                kind,
            };
            with_session(|session| {
                let doc = session
                    .apply(|doc| push_notification(doc, &input, Utc::now()))
                    .map_err(|err| err.to_string())?;
                Ok(doc.notifications.last().map(|item| item.id.to_string()))
            })
        });
    respond("entry_push_notification", "Notification added.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_mark_notification_read(id: String) -> EntryActionResponse {
    let id = EntityId::new(id);
    let result = with_session(|session| {
        session
            .apply(|doc| mark_notification_read(doc, &id))
            .map_err(|err| err.to_string())?;
        Ok(Some(id.to_string()))
    });
    respond("entry_mark_notification_read", "Marked as read.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_mark_all_notifications_read() -> EntryActionResponse {
    let result = with_session(|session| {
        session.update(mark_all_notifications_read);
        Ok(None)
    });
    respond("entry_mark_all_notifications_read", "All caught up.", result)
}

/// Wipes every record and starts over. The caller confirms first.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_factory_reset() -> EntryActionResponse {
    let result = with_session(|session| {
        session.factory_reset();
        Ok(None)
    });
    respond("entry_factory_reset", "All data erased.", result)
}

/// Tasks filed under `date` (defaults to today).
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list_tasks(date: Option<String>) -> TaskListResponse {
    let result = parse_day_or_today(date.as_deref()).and_then(|day| {
        with_session(|session| {
            Ok(tasks_for_day_sorted(&session.document().tasks, day)
                .into_iter()
                .map(task_item)
                .collect::<Vec<_>>())
        })
    });
    match result {
        Ok(items) => TaskListResponse {
            ok: true,
            message: "ok".to_string(),
            items,
        },
        Err(err) => TaskListResponse {
            ok: false,
            message: list_failure("entry_list_tasks", &err),
            items: Vec::new(),
        },
    }
}

/// Trash contents in the order they were deleted.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list_trash() -> TrashListResponse {
    let result = with_session(|session| {
        Ok(session
            .document()
            .trash
            .iter()
            .map(trash_entry_item)
            .collect::<Vec<_>>())
    });
    match result {
        Ok(items) => TrashListResponse {
            ok: true,
            message: "ok".to_string(),
            items,
        },
        Err(err) => TrashListResponse {
            ok: false,
            message: list_failure("entry_list_trash", &err),
            items: Vec::new(),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_list_transactions() -> TransactionListResponse {
    let result = with_session(|session| {
        let doc = session.document();
        Ok(transactions(&doc.incomes, &doc.expenses)
            .into_iter()
            .map(transaction_item)
            .collect::<Vec<_>>())
    });
    match result {
        Ok(items) => TransactionListResponse {
            ok: true,
            message: "ok".to_string(),
            items,
        },
        Err(err) => TransactionListResponse {
            ok: false,
            message: list_failure("entry_list_transactions", &err),
            items: Vec::new(),
        },
    }
}

/// Summary for `date` (defaults to today), with expenses bucketed in the
/// host's local timezone.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_dashboard(date: Option<String>) -> DashboardResponse {
    let result = parse_day_or_today(date.as_deref())
        .and_then(|day| with_session(|session| Ok(dashboard(session.document(), day))));
    match result {
        Ok(response) => response,
        Err(err) => {
            warn!("event=ffi_call module=ffi call=entry_dashboard status=error");
            DashboardResponse::failure(format!("entry_dashboard failed: {err}"))
        }
    }
}

fn dashboard(doc: &Document, day: NaiveDate) -> DashboardResponse {
    let summary = daily_summary(doc, day, &Local);
    DashboardResponse {
        ok: true,
        message: "ok".to_string(),
        day: day.format("%Y-%m-%d").to_string(),
        name: doc.name.clone(),
        currency: doc.currency.clone(),
        has_onboarded: doc.has_onboarded,
        tasks_done: to_u32(summary.tasks_done),
        tasks_total: to_u32(summary.tasks_total),
        completion_ratio: summary.completion_ratio,
        streak: summary.streak,
        spent_today: summary.spent,
        balance: summary.balance,
        mood: summary.mood.map(|mood| mood_label(mood).to_string()),
        outstanding_lent: outstanding_loan_total(&doc.loans, LoanType::Lent),
        outstanding_borrowed: outstanding_loan_total(&doc.loans, LoanType::Borrowed),
        unread_notifications: to_u32(unread_notifications(&doc.notifications).len()),
        trash_count: to_u32(doc.trash.len()),
    }
}

fn task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        text: task.text.clone(),
        completed: task.completed,
        priority: task.priority.as_str().to_string(),
        date: task.date.format("%Y-%m-%d").to_string(),
        time: task.time.clone(),
    }
}

fn trash_entry_item(item: &TrashItem) -> TrashEntryItem {
    let label = match &item.entity {
        TrashedEntity::Task(task) => task.text.clone(),
        TrashedEntity::Expense(expense) => expense.description.clone(),
        TrashedEntity::Income(income) => income.description.clone(),
        TrashedEntity::Loan(loan) => loan.person.clone(),
        TrashedEntity::Challenge(challenge) => challenge.text.clone(),
        TrashedEntity::Mistake(mistake) => mistake.text.clone(),
    };
    let key = item.key();
    TrashEntryItem {
        kind: key.kind.as_str().to_string(),
        id: key.id.to_string(),
        label,
        deleted_at: timestamp(item.deleted_at),
    }
}

fn transaction_item(row: Transaction<'_>) -> TransactionItem {
    TransactionItem {
        flow: row.flow.as_str().to_string(),
        id: row.id.to_string(),
        amount: row.amount,
        description: row.description.to_string(),
        date: timestamp(row.date),
    }
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn list_failure(call: &'static str, err: &str) -> String {
    warn!("event=ffi_call module=ffi call={call} status=error");
    format!("{call} failed: {err}")
}

fn respond(
    call: &'static str,
    message: &'static str,
    result: Result<Option<String>, String>,
) -> EntryActionResponse {
    match result {
        Ok(entity_id) => EntryActionResponse::success(message, entity_id),
        Err(err) => {
            warn!("event=ffi_call module=ffi call={call} status=error");
            EntryActionResponse::failure(format!("{call} failed: {err}"))
        }
    }
}

fn with_session<T>(
    f: impl FnOnce(&mut Session<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let _guard = ENTRY_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let path = resolve_store_path();
    let conn = open_db(&path).map_err(|err| format!("store open failed: {err}"))?;
    let store =
        SqliteDocumentStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let mut session = LifeSession::open(store, Environment::from_process());
    f(&mut session)
}

fn resolve_store_path() -> PathBuf {
    STORE_PATH
        .get_or_init(|| {
            std::env::var(STORE_PATH_ENV)
                .ok()
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(STORE_FILE_NAME))
        })
        .clone()
}

fn parse_day_or_today(raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Local::now().date_naive()),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| "date must be YYYY-MM-DD".to_string()),
    }
}

fn parse_priority(raw: &str) -> Result<Priority, String> {
    Priority::parse(raw).ok_or_else(|| "priority must be urgent|high|medium|low".to_string())
}

fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    LoanType::parse(raw).ok_or_else(|| "loan type must be lent|borrowed".to_string())
}

fn parse_trash_key(kind: &str, id: String) -> Result<TrashKey, String> {
    let kind = TrashKind::parse(kind).ok_or_else(|| {
        "kind must be task|expense|income|loan|challenge|mistake".to_string()
    })?;
    Ok(TrashKey::new(kind, EntityId::new(id)))
}

fn mood_label(mood: Mood) -> &'static str {
    match mood {
        Mood::Great => "great",
        Mood::Good => "good",
        Mood::Neutral => "neutral",
        Mood::Bad => "bad",
        Mood::Awful => "awful",
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
