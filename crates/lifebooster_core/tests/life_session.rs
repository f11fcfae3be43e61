use chrono::Utc;
use lifebooster_core::model::journal::Mood;
use lifebooster_core::reducer::journal::set_mood;
use lifebooster_core::reducer::profile::complete_onboarding;
use lifebooster_core::store::open_db;
use lifebooster_core::{Environment, LifeSession, SqliteDocumentStore};

#[test]
fn session_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.db");
    let env = Environment::new(Some("ar-EG"), Some("Africa/Cairo"));

    let user_id = {
        let conn = open_db(&path).unwrap();
        let store = SqliteDocumentStore::try_new(&conn).unwrap();
        let mut session = LifeSession::open(store, env.clone());
        assert_eq!(session.document().currency, "EGP");

        session
            .apply(|doc| complete_onboarding(doc, "Karim", Utc::now()))
            .unwrap();
        let today = session.today();
        session.update(|doc| set_mood(doc, today, Mood::Good));
        session.document().user_id.clone()
    };

    let conn = open_db(&path).unwrap();
    let store = SqliteDocumentStore::try_new(&conn).unwrap();
    let session = LifeSession::open(store, env);
    let doc = session.document();
    assert!(doc.has_onboarded);
    assert_eq!(doc.name, "Karim");
    assert_eq!(doc.user_id, user_id);
    assert_eq!(doc.moods.len(), 1);
}

#[test]
fn factory_reset_issues_new_first_run_document() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("reset.db")).unwrap();
    let store = SqliteDocumentStore::try_new(&conn).unwrap();
    let mut session = LifeSession::open(store, Environment::new(Some("en-CA"), None));
    session
        .apply(|doc| complete_onboarding(doc, "Lee", Utc::now()))
        .unwrap();

    let doc = session.factory_reset();
    assert!(!doc.has_onboarded);
    assert_eq!(doc.name, "User");
    assert_eq!(doc.currency, "CAD");
}
