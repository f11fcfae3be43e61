//! Long-term goals, lessons learned and daily mood.

use crate::model::ids::{DayBucket, EntityId, Identified};
use serde::{Deserialize, Serialize};

/// Long-lived goal tagged to the day it was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: EntityId,
    pub text: String,
    pub completed: bool,
    pub date: DayBucket,
}

impl Identified for Challenge {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Lesson log entry: what went wrong and what was learned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub id: EntityId,
    pub text: String,
    pub date: DayBucket,
}

impl Identified for Mistake {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Bad,
    Awful,
}

impl Mood {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "great" => Some(Self::Great),
            "good" => Some(Self::Good),
            "neutral" => Some(Self::Neutral),
            "bad" => Some(Self::Bad),
            "awful" => Some(Self::Awful),
            _ => None,
        }
    }
}

/// Mood for one day. Keyed by `date`, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: DayBucket,
    pub mood: Mood,
}
