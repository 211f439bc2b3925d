//! Pure derivations over a task snapshot.
//!
//! # Responsibility
//! - Partition tasks into today/upcoming/overdue/weekly buckets.
//! - Filter, group and count tasks for list and dashboard views.
//!
//! # Invariants
//! - No function reads the wall clock; `now` is always a parameter.
//! - Inputs are never mutated and result order follows input order.

pub mod filter;
pub mod stats;
pub mod views;
pub mod window;
