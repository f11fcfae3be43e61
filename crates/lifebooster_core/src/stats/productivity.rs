//! Task completion ratios, calendar health and streaks.

use crate::model::ids::DayBucket;
use crate::model::task::{Priority, Task};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Calendar classification of one day's task completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayHealth {
    /// No tasks filed for the day.
    None,
    /// Less than half completed.
    Low,
    /// At least half, but not all, completed.
    Medium,
    /// Every task completed.
    High,
}

/// Completed and total task counts for a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTally {
    pub completed: usize,
    pub total: usize,
}

impl DayTally {
    /// `completed / total`, with `0/0` defined as `0.0`.
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    pub fn health(self) -> DayHealth {
        if self.total == 0 {
            return DayHealth::None;
        }
        if self.completed == self.total {
            return DayHealth::High;
        }
        if self.ratio() >= 0.5 {
            DayHealth::Medium
        } else {
            DayHealth::Low
        }
    }

    /// Counts toward a streak: at least one task, all completed.
    pub fn is_fully_completed(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn tally_for_day(tasks: &[Task], day: DayBucket) -> DayTally {
    tasks
        .iter()
        .filter(|task| task.date == day)
        .fold(DayTally::default(), |mut tally, task| {
            tally.total += 1;
            if task.completed {
                tally.completed += 1;
            }
            tally
        })
}

/// Share of `day`'s tasks that are completed, in `0.0..=1.0`.
pub fn completion_ratio(tasks: &[Task], day: DayBucket) -> f64 {
    tally_for_day(tasks, day).ratio()
}

pub fn day_health(tasks: &[Task], day: DayBucket) -> DayHealth {
    tally_for_day(tasks, day).health()
}

/// Consecutive fully completed days ending at `today`.
///
/// A day with no tasks breaks the streak, today included.
pub fn current_streak(tasks: &[Task], today: DayBucket) -> u32 {
    let mut tallies: HashMap<DayBucket, DayTally> = HashMap::new();
    for task in tasks {
        let tally = tallies.entry(task.date).or_default();
        tally.total += 1;
        if task.completed {
            tally.completed += 1;
        }
    }

    let mut streak = 0;
    let mut day = today;
    while tallies
        .get(&day)
        .is_some_and(|tally| tally.is_fully_completed())
    {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Health for every day of the given calendar month, in date order.
pub fn month_health(tasks: &[Task], year: i32, month: u32) -> Vec<(DayBucket, DayHealth)> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| day.month() == month)
        .map(|day| (day, day_health(tasks, day)))
        .collect()
}

/// Day buckets from `before` days ahead of `center` to `after` days past it.
///
/// Clipped at the ends of the representable calendar.
pub fn days_around(center: DayBucket, before: u32, after: u32) -> Vec<DayBucket> {
    let start = center
        .checked_sub_days(Days::new(u64::from(before)))
        .unwrap_or(NaiveDate::MIN);
    let end = center
        .checked_add_days(Days::new(u64::from(after)))
        .unwrap_or(NaiveDate::MAX);
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// `day`'s tasks with incomplete ones first, each group by priority.
pub fn tasks_for_day_sorted(tasks: &[Task], day: DayBucket) -> Vec<&Task> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|task| task.date == day).collect();
    selected.sort_by_key(|task| (task.completed, task.priority));
    selected
}

/// Number of `day`'s tasks per priority, urgent first.
pub fn priority_counts(tasks: &[Task], day: DayBucket) -> [(Priority, usize); 4] {
    Priority::ALL.map(|priority| {
        let count = tasks
            .iter()
            .filter(|task| task.date == day && task.priority == priority)
            .count();
        (priority, count)
    })
}

#[cfg(test)]
mod tests {
    use super::{
        completion_ratio, current_streak, day_health, days_around, month_health,
        priority_counts, tasks_for_day_sorted, DayHealth,
    };
    use crate::model::ids::EntityId;
    use crate::model::task::{Priority, Task};
    use chrono::NaiveDate;

    fn task(id: &str, day: NaiveDate, completed: bool, priority: Priority) -> Task {
        Task {
            id: EntityId::new(id),
            text: format!("task {id}"),
            completed,
            priority,
            date: day,
            time: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn ratio_of_empty_day_is_zero() {
        assert_eq!(completion_ratio(&[], day(1)), 0.0);
        assert_eq!(day_health(&[], day(1)), DayHealth::None);
    }

    #[test]
    fn health_classification_thresholds() {
        let mut tasks = vec![
            task("1", day(3), true, Priority::High),
            task("2", day(3), false, Priority::High),
            task("3", day(3), false, Priority::Low),
        ];
        assert!((completion_ratio(&tasks, day(3)) - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(day_health(&tasks, day(3)), DayHealth::Low);

        tasks[1].completed = true;
        assert_eq!(day_health(&tasks, day(3)), DayHealth::Medium);

        tasks[2].completed = true;
        assert_eq!(day_health(&tasks, day(3)), DayHealth::High);
    }

    #[test]
    fn streak_is_zero_when_today_has_no_tasks() {
        let tasks = vec![
            task("1", day(8), true, Priority::Low),
            task("2", day(9), true, Priority::Low),
        ];
        assert_eq!(current_streak(&tasks, day(10)), 0);
        assert_eq!(current_streak(&tasks, day(9)), 2);
    }

    #[test]
    fn streak_stops_at_incomplete_or_empty_day() {
        let tasks = vec![
            task("1", day(5), true, Priority::Low),
            task("2", day(7), true, Priority::Low),
            task("3", day(8), true, Priority::Low),
            task("4", day(8), false, Priority::Low),
            task("5", day(9), true, Priority::Low),
            task("6", day(10), true, Priority::Low),
        ];
        assert_eq!(current_streak(&tasks, day(10)), 2);
        assert_eq!(current_streak(&tasks, day(7)), 1);
    }

    #[test]
    fn sorted_tasks_put_open_work_first_by_priority() {
        let tasks = vec![
            task("a", day(2), true, Priority::Urgent),
            task("b", day(2), false, Priority::Low),
            task("c", day(2), false, Priority::Urgent),
            task("d", day(3), false, Priority::High),
        ];
        let ids: Vec<&str> = tasks_for_day_sorted(&tasks, day(2))
            .into_iter()
            .map(|task| task.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        let counts = priority_counts(&tasks, day(2));
        assert_eq!(counts[0], (Priority::Urgent, 2));
        assert_eq!(counts[3], (Priority::Low, 1));
    }

    #[test]
    fn calendar_helpers_cover_expected_ranges() {
        assert_eq!(month_health(&[], 2024, 2).len(), 29);
        assert!(month_health(&[], 2024, 13).is_empty());

        let window = days_around(day(10), 3, 7);
        assert_eq!(window.len(), 11);
        assert_eq!(window[0], day(7));
        assert_eq!(window[10], day(17));
    }

    #[test]
    fn days_around_clips_at_calendar_bounds() {
        let window = days_around(NaiveDate::MIN, 3, 7);
        assert_eq!(window.len(), 8);
        assert_eq!(window[0], NaiveDate::MIN);

        let window = days_around(NaiveDate::MAX, 2, u32::MAX);
        assert_eq!(window.len(), 3);
        assert_eq!(window[2], NaiveDate::MAX);
    }
}
