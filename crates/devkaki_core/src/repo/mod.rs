//! Repository layer for the task collection.
//!
//! # Responsibility
//! - Define the storage contract used by `TaskStore`.
//! - Keep collection bookkeeping out of the store's orchestration logic.
//!
//! # Invariants
//! - Repository writes enforce `Task::validate()` before mutating.
//! - Repository APIs return semantic errors (`DuplicateId`, `NotFound`).

pub mod task_repo;
