//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record and the filter mode enum.
//! - Keep wire field names stable for persisted JSON.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod filter;
pub mod task;
