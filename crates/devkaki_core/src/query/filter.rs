//! All-tasks list filter: completion status plus optional priority.

use crate::model::task::{Priority, Task};

/// Completion criterion of the all-tasks list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    /// Whether `task`'s completion state is accepted.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.is_completed,
            Self::Pending => !task.is_completed,
        }
    }
}

/// Combined filter; a task must satisfy both criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    /// `None` accepts every priority.
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Whether `task` passes both criteria.
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task) && self.priority.map_or(true, |p| task.priority == p)
    }

    /// Matching tasks in input order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}
