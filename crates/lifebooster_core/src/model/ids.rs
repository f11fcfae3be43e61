//! Entity identity and calendar helpers.
//!
//! # Invariants
//! - `EntityId` is derived from wall-clock milliseconds at creation, bumped
//!   forward past values already held by the collection or its trashed
//!   entries.
//! - A day bucket is a calendar date with no time component.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Calendar-day grouping key used by tasks, challenges, mistakes and moods.
pub type DayBucket = NaiveDate;

/// Collection-local entity identifier.
///
/// Serialized as a bare string to match the stored layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds an identifier from the creation instant in epoch milliseconds.
    pub fn from_instant(now: DateTime<Utc>) -> Self {
        Self(now.timestamp_millis().to_string())
    }

    /// Like [`Self::from_instant`], but skips millisecond values present in
    /// `taken`.
    pub fn next_in<'a>(
        now: DateTime<Utc>,
        taken: impl IntoIterator<Item = &'a EntityId>,
    ) -> Self {
        let taken: HashSet<&str> = taken.into_iter().map(EntityId::as_str).collect();
        let mut millis = now.timestamp_millis();
        while taken.contains(millis.to_string().as_str()) {
            millis += 1;
        }
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Implemented by every entity that lives in an id-keyed collection.
pub trait Identified {
    fn id(&self) -> &EntityId;
}

/// Serde adapter for optional timestamps that also accepts bare dates.
///
/// Older documents stored loan due dates straight from a date picker
/// (`YYYY-MM-DD`); those decode as midnight UTC.
pub mod lenient_timestamp {
    use super::parse_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_some(&instant.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_timestamp(text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{text}`"))),
        }
    }
}

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date as midnight UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::{parse_timestamp, EntityId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn entity_id_uses_epoch_millis() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(EntityId::from_instant(now).as_str(), "1709281800000");
    }

    #[test]
    fn next_in_skips_taken_millis() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let taken = [
            EntityId::new("1709281800001"),
            EntityId::new("1709281800000"),
        ];
        assert_eq!(EntityId::next_in(now, &taken).as_str(), "1709281800002");
        assert_eq!(EntityId::next_in(now, []).as_str(), "1709281800000");
    }

    #[test]
    fn parse_timestamp_accepts_rfc3339_and_bare_dates() {
        let full = parse_timestamp("2024-05-01T10:15:00.000Z").unwrap();
        assert_eq!(full, Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 0).unwrap());

        let bare = parse_timestamp("2024-05-01").unwrap();
        assert_eq!(bare, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());

        assert!(parse_timestamp("next tuesday").is_none());
    }
}
