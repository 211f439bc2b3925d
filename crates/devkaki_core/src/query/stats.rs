//! Aggregate progress statistics.
//!
//! # Responsibility
//! - Count tasks per category for histogram rendering.
//! - Compute completion ratios and the consecutive-day completion streak.
//!
//! # Invariants
//! - Ratios are in `[0, 1]` and defined as 0 for an empty input.
//! - Category maps omit zero counts; iteration follows enum declaration order.
//! - The streak scan is bounded to `STREAK_SCAN_DAYS` days.

use crate::model::task::{Priority, Task, TaskType};
use crate::query::views;
use crate::query::window::checked_day_window;
use chrono::{DateTime, TimeZone};
use std::collections::BTreeMap;

/// Maximum number of days, today included, the streak scan inspects.
pub const STREAK_SCAN_DAYS: u32 = 30;

/// Number of tasks per type; types with no tasks are absent.
pub fn group_counts_by_type(tasks: &[Task]) -> BTreeMap<TaskType, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.task_type).or_insert(0) += 1;
    }
    counts
}

/// Number of tasks per priority; priorities with no tasks are absent.
pub fn group_counts_by_priority(tasks: &[Task]) -> BTreeMap<Priority, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.priority).or_insert(0) += 1;
    }
    counts
}

/// `completed / total`, or 0 for no tasks.
pub fn completion_ratio<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> f64 {
    let (completed, total) = tasks
        .into_iter()
        .fold((0usize, 0usize), |(completed, total), task| {
            (completed + usize::from(task.is_completed), total + 1)
        });
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64
}

/// Truncated integer percentage of a ratio.
pub fn percent(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0) as u32
}

/// Consecutive days with at least one completion, ending today.
///
/// Day 0 (today) is optional: a day without completions at offset 0 is
/// skipped, at any later offset it ends the scan.
pub fn streak<'a, Tz: TimeZone>(
    completed_tasks: impl IntoIterator<Item = &'a Task>,
    now: &DateTime<Tz>,
) -> u32 {
    let completed_at: Vec<i64> = completed_tasks
        .into_iter()
        .filter_map(|task| task.completed_at)
        .collect();
    if completed_at.is_empty() {
        return 0;
    }

    let mut streak = 0;
    for offset in 0..STREAK_SCAN_DAYS {
        let Some(window) = checked_day_window(now, u64::from(offset)) else {
            break;
        };
        if completed_at.iter().any(|&instant| window.contains(instant)) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

/// Completion progress among tasks due today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
    /// `completed * 100 / total`, 0 when nothing is due.
    pub percent: u32,
}

impl DailyProgress {
    /// Progress among tasks whose due date falls in today's window.
    pub fn for_today<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let due_today = views::today(tasks, now);
        let total = due_today.len();
        let completed = due_today.iter().filter(|task| task.is_completed).count();
        let percent = if total == 0 {
            0
        } else {
            u32::try_from(completed * 100 / total).unwrap_or(100)
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

/// Everything the progress dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub streak: u32,
    pub total_completed: usize,
    pub total_tasks: usize,
    pub weekly_completed: usize,
    pub weekly_total: usize,
    pub weekly_ratio: f64,
    pub by_type: BTreeMap<TaskType, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
}

impl ProgressSummary {
    /// Derives every dashboard figure from one snapshot and `now`.
    pub fn compute<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let completed = views::completed(tasks);
        let weekly = views::weekly(tasks, now);

        Self {
            streak: streak(completed.iter().copied(), now),
            total_completed: completed.len(),
            total_tasks: tasks.len(),
            weekly_completed: weekly.iter().filter(|task| task.is_completed).count(),
            weekly_total: weekly.len(),
            weekly_ratio: completion_ratio(weekly.iter().copied()),
            by_type: group_counts_by_type(tasks),
            by_priority: group_counts_by_priority(tasks),
        }
    }
}
