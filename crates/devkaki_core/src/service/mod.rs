//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository writes, timestamps and snapshot publication.
//! - Keep presentation layers decoupled from storage details.

pub mod task_store;
