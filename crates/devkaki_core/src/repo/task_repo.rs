//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered task collection with uniqueness on `id`.
//! - Report semantic errors (`DuplicateId`, `NotFound`) to the store.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before mutating.
//! - Insertion order is preserved; replacements keep their position.

use crate::model::task::{Task, TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors reported by task repository and store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TaskValidationError),
    DuplicateId(TaskId),
    NotFound(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "task id already exists: {id}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract behind `TaskStore`.
pub trait TaskRepository {
    /// Appends a task. Fails on an existing id.
    fn insert(&mut self, task: Task) -> RepoResult<()>;
    /// Replaces the task with the same id in place, returning the old value.
    fn replace(&mut self, task: Task) -> RepoResult<Task>;
    /// Removes a task by id. Absence is not an error.
    fn remove(&mut self, id: &str) -> Option<Task>;
    /// Task with `id`, if present.
    fn get(&self, id: &str) -> Option<&Task>;
    /// All tasks in insertion order.
    fn list(&self) -> &[Task];
}

/// Vec-backed repository. Lookups are linear; collections are small.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&mut self, task: Task) -> RepoResult<()> {
        task.validate()?;
        if self.position(&task.id).is_some() {
            return Err(RepoError::DuplicateId(task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn replace(&mut self, task: Task) -> RepoResult<Task> {
        task.validate()?;
        let index = self
            .position(&task.id)
            .ok_or_else(|| RepoError::NotFound(task.id.clone()))?;
        Ok(std::mem::replace(&mut self.tasks[index], task))
    }

    fn remove(&mut self, id: &str) -> Option<Task> {
        self.position(id).map(|index| self.tasks.remove(index))
    }

    fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTaskRepository, RepoError, TaskRepository};
    use crate::model::task::{Priority, Task, TaskType};

    fn task(id: &str) -> Task {
        let mut task = Task::new(format!("task {id}"), TaskType::Bug, Priority::Low);
        task.id = id.to_string();
        task
    }

    #[test]
    fn replace_keeps_position_and_remove_keeps_order() {
        let mut repo = InMemoryTaskRepository::new();
        for id in ["a", "b", "c"] {
            repo.insert(task(id)).unwrap();
        }

        let mut renamed = task("b");
        renamed.name = "renamed".into();
        let previous = repo.replace(renamed).unwrap();
        assert_eq!(previous.name, "task b");

        repo.remove("a");
        let names: Vec<_> = repo.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["renamed", "task c"]);
    }

    #[test]
    fn insert_rejects_duplicate_and_invalid() {
        let mut repo = InMemoryTaskRepository::new();
        repo.insert(task("a")).unwrap();
        assert_eq!(
            repo.insert(task("a")),
            Err(RepoError::DuplicateId("a".into()))
        );

        let mut blank = task("b");
        blank.name = "   ".into();
        assert!(matches!(repo.insert(blank), Err(RepoError::Validation(_))));
        assert_eq!(repo.list().len(), 1);
    }
}
