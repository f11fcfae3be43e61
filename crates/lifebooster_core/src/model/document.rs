//! Root document: the single unit of persistence.
//!
//! # Invariants
//! - Every collection is always present (possibly empty) after load.
//! - The document is replaced wholesale on every change; reducers never
//!   mutate a document they were handed.

use crate::model::journal::{Challenge, Mistake, MoodEntry};
use crate::model::money::{Expense, Income, Loan};
use crate::model::notification::Notification;
use crate::model::task::Task;
use crate::model::trash::TrashItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name given to a user who has not finished onboarding.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// All user data, stored as one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub has_onboarded: bool,
    pub join_date: DateTime<Utc>,
    /// Short display id such as `OP-4821`; not used for identity.
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub gender: Gender,
    /// ISO 4217 code used by the presentation layer for formatting.
    pub currency: String,
    pub tasks: Vec<Task>,
    pub challenges: Vec<Challenge>,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub loans: Vec<Loan>,
    pub mistakes: Vec<Mistake>,
    pub moods: Vec<MoodEntry>,
    pub trash: Vec<TrashItem>,
    pub notifications: Vec<Notification>,
    pub last_active_date: DateTime<Utc>,
}

impl Document {
    /// Builds the first-run document.
    pub fn initial(
        now: DateTime<Utc>,
        currency: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            has_onboarded: false,
            join_date: now,
            user_id: user_id.into(),
            name: DEFAULT_DISPLAY_NAME.to_string(),
            profile_image: None,
            cover_image: None,
            gender: Gender::default(),
            currency: currency.into(),
            tasks: Vec::new(),
            challenges: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
            loans: Vec::new(),
            mistakes: Vec::new(),
            moods: Vec::new(),
            trash: Vec::new(),
            notifications: Vec::new(),
            last_active_date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Gender};
    use chrono::{TimeZone, Utc};

    #[test]
    fn initial_document_serializes_with_camel_case_keys() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let doc = Document::initial(now, "MAD", "OP-1234");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["hasOnboarded"], false);
        assert_eq!(json["userId"], "OP-1234");
        assert_eq!(json["name"], "User");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["currency"], "MAD");
        assert!(json["trash"].as_array().unwrap().is_empty());
        assert!(json.get("profileImage").is_none());
        assert!(json.get("lastActiveDate").is_some());
    }

    #[test]
    fn gender_parse_accepts_known_values() {
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("other"), None);
    }
}
