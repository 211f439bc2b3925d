//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by every view.
//! - Validate record-level invariants before any write or decode.
//!
//! # Invariants
//! - `id` is stable and never reassigned after creation.
//! - `completed_at.is_some() == is_completed`.
//! - `created_at` never changes once the store has assigned it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Kept as a plain string so externally supplied ids survive unchanged.
pub type TaskId = String;

/// Generates a fresh opaque task id.
pub fn new_task_id() -> TaskId {
    Uuid::new_v4().to_string()
}

/// Kind of developer work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Bug,
    Feature,
    Learning,
    Refactor,
    Meeting,
    Review,
}

impl TaskType {
    /// Every variant in declaration order, for fixed-domain rendering.
    pub const ALL: [TaskType; 6] = [
        TaskType::Bug,
        TaskType::Feature,
        TaskType::Learning,
        TaskType::Refactor,
        TaskType::Meeting,
        TaskType::Review,
    ];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Learning => "learning",
            Self::Refactor => "refactor",
            Self::Meeting => "meeting",
            Self::Review => "review",
        }
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Every variant from most to least urgent.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `id` is empty.
    EmptyId,
    /// `name` is empty or whitespace only.
    BlankName,
    /// A tag at `index` is empty or whitespace only.
    EmptyTag { index: usize },
    /// `is_completed` and `completed_at` disagree.
    CompletionMismatch { is_completed: bool },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::BlankName => write!(f, "task name must not be blank"),
            Self::EmptyTag { index } => write!(f, "tag at index {index} must not be empty"),
            Self::CompletionMismatch { is_completed: true } => {
                write!(f, "completed task must carry completed_at")
            }
            Self::CompletionMismatch {
                is_completed: false,
            } => write!(f, "open task must not carry completed_at"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Values are replaced wholesale on mutation; the store never edits a field
/// of a task it has already published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    /// Serialized as `type` to match the external record shape.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: Priority,
    /// Unix epoch milliseconds. `None` means no deadline.
    pub due_date: Option<i64>,
    pub estimated_hours: u32,
    pub is_completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Set iff `is_completed`.
    pub completed_at: Option<i64>,
    pub tags: Vec<String>,
}

impl Task {
    /// Creates an open task with an empty id and default optional fields.
    ///
    /// The store assigns `id` (when empty) and `created_at` on insert.
    pub fn new(name: impl Into<String>, task_type: TaskType, priority: Priority) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            description: String::new(),
            task_type,
            priority,
            due_date: None,
            estimated_hours: 0,
            is_completed: false,
            created_at: 0,
            completed_at: None,
            tags: Vec::new(),
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `BlankName` when `name` trims to empty.
    /// - `EmptyTag` for the first blank tag.
    /// - `CompletionMismatch` when completion flag and timestamp disagree.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::BlankName);
        }
        if let Some(index) = self.tags.iter().position(|tag| tag.trim().is_empty()) {
            return Err(TaskValidationError::EmptyTag { index });
        }
        if self.is_completed != self.completed_at.is_some() {
            return Err(TaskValidationError::CompletionMismatch {
                is_completed: self.is_completed,
            });
        }
        Ok(())
    }

    /// Returns this task with completion flipped at `now_ms`.
    pub fn toggled(&self, now_ms: i64) -> Self {
        let is_completed = !self.is_completed;
        Self {
            is_completed,
            completed_at: is_completed.then_some(now_ms),
            ..self.clone()
        }
    }
}

/// Raw decode shape; converted through `Task::validate`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    task_type: TaskType,
    priority: Priority,
    #[serde(default)]
    due_date: Option<i64>,
    #[serde(default)]
    estimated_hours: u32,
    #[serde(default)]
    is_completed: bool,
    created_at: i64,
    #[serde(default)]
    completed_at: Option<i64>,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: record.id,
            name: record.name,
            description: record.description,
            task_type: record.task_type,
            priority: record.priority,
            due_date: record.due_date,
            estimated_hours: record.estimated_hours,
            is_completed: record.is_completed,
            created_at: record.created_at,
            completed_at: record.completed_at,
            tags: record.tags,
        };
        task.validate()?;
        Ok(task)
    }
}
