//! Notification log reducers.
//!
//! # Invariants
//! - The log is append-only; entries only ever change their `read` flag.

use crate::model::document::Document;
use crate::model::ids::{EntityId, Identified};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::validation::require_text;
use crate::reducer::{append, replace_by_id, ReduceResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

/// Appends an unread notification.
pub fn push_notification(
    doc: &Document,
    input: &NewNotification,
    now: DateTime<Utc>,
) -> ReduceResult<Document> {
    let notification = Notification {
        id: EntityId::next_in(now, doc.notifications.iter().map(Identified::id)),
        title: require_text("title", &input.title)?,
        message: input.message.trim().to_string(),
        date: now,
        read: false,
        kind: input.kind,
    };
    Ok(Document {
        notifications: append(&doc.notifications, notification),
        ..doc.clone()
    })
}

pub fn mark_notification_read(doc: &Document, id: &EntityId) -> ReduceResult<Document> {
    let notifications = replace_by_id(&doc.notifications, "notifications", id, |entry| {
        Notification {
            read: true,
            ..entry.clone()
        }
    })?;
    Ok(Document {
        notifications,
        ..doc.clone()
    })
}

pub fn mark_all_notifications_read(doc: &Document) -> Document {
    Document {
        notifications: doc
            .notifications
            .iter()
            .map(|entry| Notification {
                read: true,
                ..entry.clone()
            })
            .collect(),
        ..doc.clone()
    }
}
