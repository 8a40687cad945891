//! Pure view derivation.
//!
//! # Responsibility
//! - Narrow the task list into the display list (search, then mode).
//! - Format relative ages for display rows.
//!
//! # Invariants
//! - Functions here are deterministic and never mutate their inputs.

pub mod filter;
pub mod time_ago;
