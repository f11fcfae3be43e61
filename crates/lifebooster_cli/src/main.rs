//! Smoke-check CLI for the core crate.
//!
//! # Responsibility
//! - Verify `lifebooster_core` linkage without the Flutter runtime.
//! - With a store path argument, print today's summary for that store.

use lifebooster_core::stats::summary::daily_summary;
use lifebooster_core::store::open_db;
use lifebooster_core::{Environment, LifeSession, SqliteDocumentStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("lifebooster_core ping={}", lifebooster_core::ping());
    println!("lifebooster_core version={}", lifebooster_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };
    match print_summary(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("summary failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_summary(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(path)?;
    let store = SqliteDocumentStore::try_new(&conn)?;
    let session = LifeSession::open(store, Environment::from_process());
    let doc = session.document();
    let summary = daily_summary(doc, session.today(), &chrono::Local);

    println!("user={} currency={}", doc.user_id, doc.currency);
    println!(
        "day={} tasks={}/{} streak={} spent={:.2} balance={:.2}",
        summary.day,
        summary.tasks_done,
        summary.tasks_total,
        summary.streak,
        summary.spent,
        summary.balance
    );
    println!(
        "loans={} trash={} unread={}",
        doc.loans.len(),
        doc.trash.len(),
        doc.notifications.iter().filter(|item| !item.read).count()
    );
    Ok(())
}
