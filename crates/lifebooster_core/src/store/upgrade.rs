//! Load-time upgrade from older stored documents.
//!
//! # Responsibility
//! - Decode stored JSON with every field optional.
//! - Backfill absent fields through an ordered registry of named steps.
//! - Produce a fully populated `Document`.
//!
//! # Invariants
//! - Step versions are strictly increasing and steps run in that order.
//! - Every step is idempotent: it only fills a field that is absent.
//! - The stored layout carries no version field; each step detects its own
//!   need from key presence.

use crate::locale::{generate_user_id, Environment};
use crate::model::document::{Document, Gender, DEFAULT_DISPLAY_NAME};
use crate::model::journal::{Challenge, Mistake, MoodEntry};
use crate::model::money::{Expense, Income, Loan};
use crate::model::notification::Notification;
use crate::model::task::Task;
use crate::model::trash::TrashItem;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Document as found in storage, before backfill.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub has_onboarded: Option<bool>,
    pub join_date: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub cover_image: Option<String>,
    pub gender: Option<Gender>,
    pub currency: Option<String>,
    pub tasks: Option<Vec<Task>>,
    pub challenges: Option<Vec<Challenge>>,
    pub expenses: Option<Vec<Expense>>,
    pub incomes: Option<Vec<Income>>,
    pub loans: Option<Vec<Loan>>,
    pub mistakes: Option<Vec<Mistake>>,
    pub moods: Option<Vec<MoodEntry>>,
    pub trash: Option<Vec<TrashItem>>,
    pub notifications: Option<Vec<Notification>>,
    pub last_active_date: Option<DateTime<Utc>>,
}

/// Inputs needed to synthesize defaults for missing fields.
#[derive(Debug, Clone)]
pub struct UpgradeContext<'a> {
    pub now: DateTime<Utc>,
    pub environment: &'a Environment,
}

/// Steps that fired during one upgrade, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeReport {
    pub applied: Vec<&'static str>,
}

impl UpgradeReport {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

#[derive(Clone, Copy)]
struct UpgradeStep {
    version: u32,
    name: &'static str,
    apply: fn(&mut StoredDocument, &UpgradeContext<'_>) -> bool,
}

const UPGRADE_STEPS: &[UpgradeStep] = &[
    UpgradeStep {
        version: 1,
        name: "baseline_fields",
        apply: backfill_baseline,
    },
    UpgradeStep {
        version: 2,
        name: "currency",
        apply: backfill_currency,
    },
    UpgradeStep {
        version: 3,
        name: "incomes",
        apply: backfill_incomes,
    },
    UpgradeStep {
        version: 4,
        name: "gender",
        apply: backfill_gender,
    },
    UpgradeStep {
        version: 5,
        name: "join_date",
        apply: backfill_join_date,
    },
    UpgradeStep {
        version: 6,
        name: "trash",
        apply: backfill_trash,
    },
    UpgradeStep {
        version: 7,
        name: "notifications",
        apply: backfill_notifications,
    },
    UpgradeStep {
        version: 8,
        name: "user_id",
        apply: backfill_user_id,
    },
    UpgradeStep {
        version: 9,
        name: "moods",
        apply: backfill_moods,
    },
    UpgradeStep {
        version: 10,
        name: "last_active_date",
        apply: backfill_last_active_date,
    },
];

/// Returns the version of the newest upgrade step.
pub fn latest_upgrade_version() -> u32 {
    UPGRADE_STEPS.last().map_or(0, |step| step.version)
}

/// Backfills `stored` and returns the populated document.
pub fn upgrade(
    mut stored: StoredDocument,
    ctx: &UpgradeContext<'_>,
) -> (Document, UpgradeReport) {
    let mut report = UpgradeReport::default();
    for step in UPGRADE_STEPS {
        if (step.apply)(&mut stored, ctx) {
            report.applied.push(step.name);
        }
    }

    let document = Document {
        has_onboarded: stored.has_onboarded.unwrap_or_default(),
        join_date: stored.join_date.unwrap_or(ctx.now),
        user_id: stored.user_id.unwrap_or_else(generate_user_id),
        name: stored
            .name
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        profile_image: stored.profile_image,
        cover_image: stored.cover_image,
        gender: stored.gender.unwrap_or_default(),
        currency: stored
            .currency
            .unwrap_or_else(|| ctx.environment.detect_currency()),
        tasks: stored.tasks.unwrap_or_default(),
        challenges: stored.challenges.unwrap_or_default(),
        expenses: stored.expenses.unwrap_or_default(),
        incomes: stored.incomes.unwrap_or_default(),
        loans: stored.loans.unwrap_or_default(),
        mistakes: stored.mistakes.unwrap_or_default(),
        moods: stored.moods.unwrap_or_default(),
        trash: stored.trash.unwrap_or_default(),
        notifications: stored.notifications.unwrap_or_default(),
        last_active_date: stored.last_active_date.unwrap_or(ctx.now),
    };
    (document, report)
}

fn fill<T>(slot: &mut Option<T>, make: impl FnOnce() -> T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(make());
    true
}

fn fill_blank(slot: &mut Option<String>, make: impl FnOnce() -> String) -> bool {
    if slot.as_deref().is_some_and(|value| !value.trim().is_empty()) {
        return false;
    }
    *slot = Some(make());
    true
}

fn backfill_baseline(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    // Non-short-circuiting `|` so every field gets filled.
    fill(&mut doc.has_onboarded, || false)
        | fill(&mut doc.name, || DEFAULT_DISPLAY_NAME.to_string())
        | fill(&mut doc.tasks, Vec::new)
        | fill(&mut doc.challenges, Vec::new)
        | fill(&mut doc.expenses, Vec::new)
        | fill(&mut doc.loans, Vec::new)
        | fill(&mut doc.mistakes, Vec::new)
}

fn backfill_currency(doc: &mut StoredDocument, ctx: &UpgradeContext<'_>) -> bool {
    fill_blank(&mut doc.currency, || ctx.environment.detect_currency())
}

fn backfill_incomes(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.incomes, Vec::new)
}

fn backfill_gender(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.gender, Gender::default)
}

fn backfill_join_date(doc: &mut StoredDocument, ctx: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.join_date, || ctx.now)
}

fn backfill_trash(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.trash, Vec::new)
}

fn backfill_notifications(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.notifications, Vec::new)
}

fn backfill_user_id(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    fill_blank(&mut doc.user_id, generate_user_id)
}

fn backfill_moods(doc: &mut StoredDocument, _: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.moods, Vec::new)
}

fn backfill_last_active_date(doc: &mut StoredDocument, ctx: &UpgradeContext<'_>) -> bool {
    fill(&mut doc.last_active_date, || ctx.now)
}

#[cfg(test)]
mod tests {
    use super::{latest_upgrade_version, upgrade, StoredDocument, UpgradeContext};
    use crate::locale::Environment;
    use chrono::{TimeZone, Utc};

    #[test]
    fn steps_are_strictly_increasing() {
        let versions: Vec<u32> = super::UPGRADE_STEPS.iter().map(|step| step.version).collect();
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(latest_upgrade_version(), *versions.last().unwrap());
    }

    #[test]
    fn empty_document_fires_every_step() {
        let env = Environment::new(Some("en-GB"), None);
        let ctx = UpgradeContext {
            now: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            environment: &env,
        };

        let (doc, report) = upgrade(StoredDocument::default(), &ctx);

        assert_eq!(report.applied.len(), super::UPGRADE_STEPS.len());
        assert_eq!(doc.currency, "GBP");
        assert_eq!(doc.join_date, ctx.now);
        assert!(doc.user_id.starts_with("OP-"));
    }

    #[test]
    fn blank_currency_counts_as_missing() {
        let env = Environment::new(Some("ar-EG"), None);
        let ctx = UpgradeContext {
            now: Utc::now(),
            environment: &env,
        };
        let stored = StoredDocument {
            currency: Some("  ".to_string()),
            ..StoredDocument::default()
        };

        let (doc, report) = upgrade(stored, &ctx);
        assert_eq!(doc.currency, "EGP");
        assert!(report.applied.contains(&"currency"));
    }
}
