//! Core domain logic for DevKaki task tracking.
//! This crate is the single source of truth for task invariants; screens
//! read snapshots from `TaskStore` and render `query` results.

pub mod clock;
pub mod form;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use form::task_form::{
    parse_estimated_hours, parse_tags, resolve_due_date, DueDateOption, TaskDraft,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::sample::sample_tasks;
pub use model::task::{new_task_id, Priority, Task, TaskId, TaskType, TaskValidationError};
pub use query::filter::{StatusFilter, TaskFilter};
pub use query::stats::{DailyProgress, ProgressSummary, STREAK_SCAN_DAYS};
pub use query::window::TimeWindow;
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::task_store::{SubscriptionId, TaskSnapshot, TaskStore};

/// Minimal health-check API for embedding shells.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
