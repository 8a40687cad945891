//! Task repository.
//!
//! # Responsibility
//! - Own the in-memory, most-recent-first task list.
//! - Persist the whole list after every effective mutation.
//!
//! # Invariants
//! - Ids are unique within the list for its lifetime.
//! - Operations on unknown ids are no-ops, never errors.

pub mod task_repo;
