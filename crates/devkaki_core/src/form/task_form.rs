//! Task create/edit form resolution.
//!
//! # Responsibility
//! - Turn raw form fields into a `Task` value ready for the store.
//! - Resolve due-date shortcuts against an injected `now`.
//!
//! # Invariants
//! - Blank names are rejected before a task value is produced.
//! - Editing never changes id, completion state or creation time.

use crate::model::task::{Priority, Task, TaskType, TaskValidationError};
use crate::query::window::{local_datetime_ms, local_midnight_ms, DAY_MS};
use chrono::{DateTime, Days, TimeZone};

/// Due-date selection offered by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueDateOption {
    #[default]
    Today,
    Tomorrow,
    /// Seven days from today, not the end of the calendar week.
    ThisWeek,
    /// Explicit instant in epoch milliseconds.
    Custom(i64),
}

/// Resolves a due-date option to an instant.
///
/// Shortcut options land on 23:59:59 local time of the target day.
pub fn resolve_due_date<Tz: TimeZone>(option: DueDateOption, now: &DateTime<Tz>) -> i64 {
    let days_ahead = match option {
        DueDateOption::Today => 0,
        DueDateOption::Tomorrow => 1,
        DueDateOption::ThisWeek => 7,
        DueDateOption::Custom(instant) => return instant,
    };
    let today = now.date_naive();
    let target = today
        .checked_add_days(Days::new(days_ahead))
        .unwrap_or(today);
    let tz = now.timezone();
    match target.and_hms_opt(23, 59, 59) {
        Some(end_of_day) => local_datetime_ms(&tz, end_of_day),
        None => local_midnight_ms(&tz, target) + DAY_MS - 1000,
    }
}

/// Splits comma-separated tags, trimming and dropping empty entries.
///
/// Order and duplicates are kept as typed.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses digit-only hour input; anything else yields 0.
pub fn parse_estimated_hours(input: &str) -> u32 {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    trimmed.parse().unwrap_or(0)
}

/// Raw form state, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub due: DueDateOption,
    /// Comma-separated tag input.
    pub tags: String,
    /// Digit-only hour input.
    pub estimated_hours: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            task_type: TaskType::Feature,
            priority: Priority::Medium,
            due: DueDateOption::Today,
            tags: String::new(),
            estimated_hours: String::new(),
        }
    }
}

impl TaskDraft {
    /// Prefills an edit form from a stored task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            task_type: task.task_type,
            priority: task.priority,
            due: task
                .due_date
                .map_or(DueDateOption::Today, DueDateOption::Custom),
            tags: task.tags.join(", "),
            estimated_hours: task.estimated_hours.to_string(),
        }
    }

    /// Builds an unsaved task with an empty id for `TaskStore::add`.
    pub fn into_new_task<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<Task, TaskValidationError> {
        self.ensure_named()?;
        let mut task = Task::new(self.name.clone(), self.task_type, self.priority);
        self.fill(&mut task, now);
        Ok(task)
    }

    /// Builds the replacement for `existing`, for `TaskStore::update`.
    pub fn apply_to<Tz: TimeZone>(
        &self,
        existing: &Task,
        now: &DateTime<Tz>,
    ) -> Result<Task, TaskValidationError> {
        self.ensure_named()?;
        let mut task = existing.clone();
        task.name = self.name.clone();
        task.task_type = self.task_type;
        task.priority = self.priority;
        self.fill(&mut task, now);
        Ok(task)
    }

    fn ensure_named(&self) -> Result<(), TaskValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::BlankName);
        }
        Ok(())
    }

    fn fill<Tz: TimeZone>(&self, task: &mut Task, now: &DateTime<Tz>) {
        task.description = self.description.clone();
        task.due_date = Some(resolve_due_date(self.due, now));
        task.tags = parse_tags(&self.tags);
        task.estimated_hours = parse_estimated_hours(&self.estimated_hours);
    }
}
