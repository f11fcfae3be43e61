//! Task reducers.

use crate::model::document::Document;
use crate::model::ids::{DayBucket, EntityId};
use crate::model::task::{Priority, Task};
use crate::model::trash::TrashKind;
use crate::model::validation::{normalize_time_label, require_text};
use crate::reducer::{new_id, prepend, replace_by_id, ReduceResult};
use chrono::{DateTime, Utc};

/// Input for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub priority: Priority,
    /// Day bucket the task is filed under.
    pub date: DayBucket,
    /// Optional `HH:MM` label.
    pub time: Option<String>,
}

impl NewTask {
    pub fn new(text: impl Into<String>, priority: Priority, date: DayBucket) -> Self {
        Self {
            text: text.into(),
            priority,
            date,
            time: None,
        }
    }
}

/// Prepends a new, incomplete task.
///
/// # Errors
/// - `Validation` when the text is blank or the time label is malformed.
pub fn add_task(doc: &Document, input: &NewTask, now: DateTime<Utc>) -> ReduceResult<Document> {
    let task = Task {
        id: new_id(now, &doc.tasks, &doc.trash, TrashKind::Task),
        text: require_text("task text", &input.text)?,
        completed: false,
        priority: input.priority,
        date: input.date,
        time: normalize_time_label(input.time.as_deref())?,
    };
    Ok(Document {
        tasks: prepend(task, &doc.tasks),
        ..doc.clone()
    })
}

/// Flips `completed` on the task with `id`.
pub fn toggle_task(doc: &Document, id: &EntityId) -> ReduceResult<Document> {
    let tasks = replace_by_id(&doc.tasks, "tasks", id, |task| Task {
        completed: !task.completed,
        ..task.clone()
    })?;
    Ok(Document {
        tasks,
        ..doc.clone()
    })
}
