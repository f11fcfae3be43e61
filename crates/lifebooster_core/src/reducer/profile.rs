//! Profile, onboarding and reset reducers.

use crate::locale::{generate_user_id, Environment};
use crate::model::document::{Document, Gender};
use crate::model::validation::{normalize_currency, optional_text, require_text};
use crate::reducer::ReduceResult;
use chrono::{DateTime, Utc};

/// Partial profile update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub currency: Option<String>,
    /// `Some(None)` removes the image.
    pub profile_image: Option<Option<String>>,
    /// `Some(None)` removes the image.
    pub cover_image: Option<Option<String>>,
}

/// Marks onboarding done, records the display name and restarts `join_date`.
pub fn complete_onboarding(
    doc: &Document,
    name: &str,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    Ok(Document {
        has_onboarded: true,
        join_date: now,
        name: require_text("name", name)?,
        ..doc.clone()
    })
}

/// Applies every set field of `patch` after validating all of them.
pub fn update_profile(doc: &Document, patch: &ProfilePatch) -> ReduceResult<Document> {
    let name = match patch.name.as_deref() {
        Some(raw) => require_text("name", raw)?,
        None => doc.name.clone(),
    };
    let currency = match patch.currency.as_deref() {
        Some(raw) => normalize_currency(raw)?,
        None => doc.currency.clone(),
    };
    let profile_image = match &patch.profile_image {
        Some(update) => optional_text(update.as_deref()),
        None => doc.profile_image.clone(),
    };
    let cover_image = match &patch.cover_image {
        Some(update) => optional_text(update.as_deref()),
        None => doc.cover_image.clone(),
    };

    Ok(Document {
        name,
        currency,
        gender: patch.gender.unwrap_or(doc.gender),
        profile_image,
        cover_image,
        ..doc.clone()
    })
}

/// Records the latest time the user opened the app.
pub fn touch_last_active(doc: &Document, now: DateTime<Utc>) -> Document {
    Document {
        last_active_date: now,
        ..doc.clone()
    }
}

/// Builds the document a factory reset leaves behind.
///
/// Unconditional: confirmation belongs to the caller.
pub fn factory_reset(environment: &Environment, now: DateTime<Utc>) -> Document {
    Document::initial(now, environment.detect_currency(), generate_user_id())
}
