//! Demo seed content shown on first launch.

use crate::model::task::{new_task_id, Priority, Task, TaskType};
use crate::query::window::DAY_MS;

/// Returns the two starter tasks, created at `now_ms`.
///
/// Due dates are relative to `now_ms` (one and three days ahead).
pub fn sample_tasks(now_ms: i64) -> Vec<Task> {
    vec![
        sample(
            "Fix login bug",
            "Users cannot log in with email",
            TaskType::Bug,
            Priority::High,
            now_ms + DAY_MS,
            2,
            now_ms,
        ),
        sample(
            "Learn Jetpack Compose",
            "Complete Compose tutorial",
            TaskType::Learning,
            Priority::Medium,
            now_ms + 3 * DAY_MS,
            8,
            now_ms,
        ),
    ]
}

fn sample(
    name: &str,
    description: &str,
    task_type: TaskType,
    priority: Priority,
    due_date: i64,
    estimated_hours: u32,
    now_ms: i64,
) -> Task {
    let mut task = Task::new(name, task_type, priority);
    task.id = new_task_id();
    task.description = description.to_string();
    task.due_date = Some(due_date);
    task.estimated_hours = estimated_hours;
    task.created_at = now_ms;
    task
}
