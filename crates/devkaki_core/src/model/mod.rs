//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical data structures consumed by the store and queries.
//! - Provide demo seed content for first launch.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is permanent; there are no tombstones.

pub mod sample;
pub mod task;
