use chrono::{NaiveDate, TimeZone, Utc};
use lifebooster_core::model::document::Gender;
use lifebooster_core::model::task::Priority;
use lifebooster_core::model::trash::TrashedEntity;
use lifebooster_core::reducer::tasks::{add_task, NewTask};
use lifebooster_core::store::{open_db, UpgradeContext};
use lifebooster_core::trash::move_to_trash;
use lifebooster_core::{
    Document, DocumentStore, Environment, MemoryDocumentStore, SqliteDocumentStore, TrashKey,
    TrashKind,
};

const LEGACY_BLOB: &str = r#"{
    "hasOnboarded": true,
    "name": "Yasmine",
    "tasks": [
        {"id": "1700000000000", "text": "Water plants", "completed": true,
         "priority": "high", "date": "2023-11-14"}
    ],
    "expenses": [
        {"id": "1700000000001", "amount": 12.5, "description": "Lunch",
         "date": "2023-11-14T12:00:00.000Z"}
    ],
    "loans": [
        {"id": "1700000000002", "person": "Omar", "amount": 40, "type": "lent",
         "dueDate": "2023-12-01", "isPaid": false, "createdAt": "2023-11-14T09:00:00.000Z"}
    ],
    "challenges": [],
    "mistakes": []
}"#;

#[test]
fn sqlite_store_round_trips_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifebooster.db");
    let env = Environment::new(Some("en-US"), None);
    let now = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    let original = Document::initial(now, "USD", "OP-4242");
    let input = NewTask::new("Stretch", Priority::Urgent, day);
    let original = add_task(&original, &input, now).unwrap();
    let original = move_to_trash(
        &original,
        &TrashKey::new(TrashKind::Task, original.tasks[0].id.clone()),
        now,
    )
    .unwrap();

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteDocumentStore::try_new(&conn).unwrap();
        store.save(&original).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteDocumentStore::try_new(&conn).unwrap();
    let ctx = UpgradeContext {
        now,
        environment: &env,
    };
    let loaded = store.load(&ctx).unwrap();
    assert_eq!(loaded, original);
    assert!(matches!(loaded.trash[0].entity, TrashedEntity::Task(_)));
}

#[test]
fn legacy_blob_is_backfilled_on_load() {
    let env = Environment::new(Some("fr-FR"), Some("Europe/Paris"));
    let now = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
    let ctx = UpgradeContext {
        now,
        environment: &env,
    };
    let store = MemoryDocumentStore::with_blob(LEGACY_BLOB);

    let doc = store.load(&ctx).unwrap();

    assert!(doc.has_onboarded);
    assert_eq!(doc.name, "Yasmine");
    assert_eq!(doc.currency, "EUR");
    assert_eq!(doc.gender, Gender::Male);
    assert_eq!(doc.join_date, now);
    assert_eq!(doc.last_active_date, now);
    assert!(doc.user_id.starts_with("OP-"));
    assert!(doc.incomes.is_empty());
    assert!(doc.trash.is_empty());
    assert!(doc.notifications.is_empty());
    assert!(doc.moods.is_empty());
    assert_eq!(doc.tasks.len(), 1);
    assert_eq!(doc.expenses[0].amount, 12.5);
    assert_eq!(
        doc.loans[0].due_date,
        Some(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn corrupt_or_missing_blob_loads_as_none() {
    let env = Environment::default();
    let ctx = UpgradeContext {
        now: Utc::now(),
        environment: &env,
    };

    assert!(MemoryDocumentStore::new().load(&ctx).is_none());
    assert!(MemoryDocumentStore::with_blob("{not json").load(&ctx).is_none());
    assert!(MemoryDocumentStore::with_blob(r#"{"tasks": 7}"#)
        .load(&ctx)
        .is_none());
}

#[test]
fn clear_removes_only_own_key() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("keys.db")).unwrap();
    let primary = SqliteDocumentStore::try_new(&conn).unwrap();
    let secondary = SqliteDocumentStore::with_key(&conn, "lifebooster_data_backup").unwrap();

    primary.write_blob("{}").unwrap();
    secondary.write_blob("{}").unwrap();
    primary.clear().unwrap();

    assert!(primary.read_blob().unwrap().is_none());
    assert_eq!(secondary.read_blob().unwrap().as_deref(), Some("{}"));
}
