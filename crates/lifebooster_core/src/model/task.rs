//! Daily task entity.

use crate::model::ids::{DayBucket, EntityId, Identified};
use serde::{Deserialize, Serialize};

/// Task urgency, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
    }
}

/// One actionable item filed under a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    /// Day bucket; grouping is by exact date equality.
    pub date: DayBucket,
    /// Display-only time-of-day label captured at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Identified for Task {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
