//! Time-bucketed and categorical task views.
//!
//! All functions are pure over `(tasks, now)` and preserve input order.
//! Tasks without a due date never appear in a time-bucketed view.

use crate::model::task::{Priority, Task, TaskType};
use crate::query::window::{start_of_today_ms, start_of_tomorrow_ms, today_window, week_window};
use chrono::{DateTime, TimeZone};

fn due_where<'a>(tasks: &'a [Task], keep: impl Fn(i64, &Task) -> bool) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|&task| task.due_date.is_some_and(|due| keep(due, task)))
        .collect()
}

/// Tasks due today, completed or not.
pub fn today<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> Vec<&'a Task> {
    let window = today_window(now);
    due_where(tasks, |due, _| window.contains(due))
}

/// Open tasks due from tomorrow onwards.
pub fn upcoming<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> Vec<&'a Task> {
    let tomorrow = start_of_tomorrow_ms(now);
    due_where(tasks, |due, task| due >= tomorrow && !task.is_completed)
}

/// Open tasks due before today.
pub fn overdue<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> Vec<&'a Task> {
    let today = start_of_today_ms(now);
    due_where(tasks, |due, task| due < today && !task.is_completed)
}

/// Tasks due in the current Monday-anchored week, completed or not.
pub fn weekly<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> Vec<&'a Task> {
    let window = week_window(now);
    due_where(tasks, |due, _| window.contains(due))
}

/// Completed tasks, whatever their due date.
pub fn completed(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.is_completed).collect()
}

/// Tasks with exactly `priority`.
pub fn by_priority(tasks: &[Task], priority: Priority) -> Vec<&Task> {
    tasks.iter().filter(|task| task.priority == priority).collect()
}

/// Tasks with exactly `task_type`.
pub fn by_type(tasks: &[Task], task_type: TaskType) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.task_type == task_type)
        .collect()
}
