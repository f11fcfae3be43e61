//! Challenge, lesson and mood reducers.
//!
//! # Invariants
//! - `set_mood` keeps at most one entry per day bucket: an existing entry is
//!   replaced in place, otherwise a new one is appended.

use crate::model::document::Document;
use crate::model::ids::{DayBucket, EntityId};
use crate::model::journal::{Challenge, Mistake, Mood, MoodEntry};
use crate::model::trash::TrashKind;
use crate::model::validation::require_text;
use crate::reducer::{append, new_id, prepend, replace_by_id, ReduceResult};
use chrono::{DateTime, Utc};

/// Prepends a long-term goal filed under `date`.
pub fn add_challenge(
    doc: &Document,
    text: &str,
    date: DayBucket,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    let challenge = Challenge {
        id: new_id(now, &doc.challenges, &doc.trash, TrashKind::Challenge),
        text: require_text("goal text", text)?,
        completed: false,
        date,
    };
    Ok(Document {
        challenges: prepend(challenge, &doc.challenges),
        ..doc.clone()
    })
}

pub fn toggle_challenge(doc: &Document, id: &EntityId) -> ReduceResult<Document> {
    let challenges = replace_by_id(&doc.challenges, "challenges", id, |challenge| Challenge {
        completed: !challenge.completed,
        ..challenge.clone()
    })?;
    Ok(Document {
        challenges,
        ..doc.clone()
    })
}

/// Prepends a lesson filed under `date`.
pub fn add_mistake(
    doc: &Document,
    text: &str,
    date: DayBucket,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    let mistake = Mistake {
        id: new_id(now, &doc.mistakes, &doc.trash, TrashKind::Mistake),
        text: require_text("lesson text", text)?,
        date,
    };
    Ok(Document {
        mistakes: prepend(mistake, &doc.mistakes),
        ..doc.clone()
    })
}

/// Records `mood` for `date`, overwriting any earlier mood for that day.
pub fn set_mood(doc: &Document, date: DayBucket, mood: Mood) -> Document {
    let moods = if doc.moods.iter().any(|entry| entry.date == date) {
        doc.moods
            .iter()
            .map(|entry| {
                if entry.date == date {
                    MoodEntry { date, mood }
                } else {
                    entry.clone()
                }
            })
            .collect()
    } else {
        append(&doc.moods, MoodEntry { date, mood })
    };
    Document {
        moods,
        ..doc.clone()
    }
}
