//! Per-day dashboard figures and inbox state.

use crate::model::document::Document;
use crate::model::ids::DayBucket;
use crate::model::journal::{Mood, MoodEntry};
use crate::model::notification::Notification;
use crate::stats::finance::{balance, spent_on_day};
use crate::stats::productivity::{current_streak, tally_for_day};
use chrono::TimeZone;

/// Figures shown on the home screen for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub day: DayBucket,
    pub tasks_done: usize,
    pub tasks_total: usize,
    pub completion_ratio: f64,
    pub streak: u32,
    pub spent: f64,
    pub balance: f64,
    pub mood: Option<Mood>,
    pub lessons_logged: usize,
}

pub fn mood_on(moods: &[MoodEntry], day: DayBucket) -> Option<Mood> {
    moods
        .iter()
        .find(|entry| entry.date == day)
        .map(|entry| entry.mood)
}

pub fn unread_notifications(notifications: &[Notification]) -> Vec<&Notification> {
    notifications.iter().filter(|item| !item.read).collect()
}

pub fn has_unread(notifications: &[Notification]) -> bool {
    notifications.iter().any(|item| !item.read)
}

/// Builds the summary for `day`, bucketing expenses in `tz`.
pub fn daily_summary<Tz: TimeZone>(doc: &Document, day: DayBucket, tz: &Tz) -> DailySummary {
    let tally = tally_for_day(&doc.tasks, day);
    DailySummary {
        day,
        tasks_done: tally.completed,
        tasks_total: tally.total,
        completion_ratio: tally.ratio(),
        streak: current_streak(&doc.tasks, day),
        spent: spent_on_day(&doc.expenses, day, tz),
        balance: balance(&doc.incomes, &doc.expenses),
        mood: mood_on(&doc.moods, day),
        lessons_logged: doc.mistakes.iter().filter(|item| item.date == day).count(),
    }
}
