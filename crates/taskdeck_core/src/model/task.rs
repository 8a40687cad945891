//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted under the task list key.
//! - Enforce creation-time title normalization.
//!
//! # Invariants
//! - `id` is stable and never reused for another task in the same list.
//! - `title` is trimmed and non-empty when built through `Task::new`.
//! - `created` is fixed at construction; only `done` changes afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Persisted ids from older lists are arbitrary strings, so this wraps a
/// `String` instead of a `Uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh random id (UUID v4, simple hex form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Validation errors for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Id is empty after trimming.
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyId => write!(f, "task id must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One entry of the task list.
///
/// Field names match the persisted wire shape
/// `{id, title, done, created}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    /// Unix epoch milliseconds.
    pub created: i64,
}

impl Task {
    /// Creates a pending task with a generated id.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty or whitespace-only.
    pub fn new(title: &str, created: i64) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), title, created)
    }

    /// Creates a pending task with a caller-provided id.
    pub fn with_id(id: TaskId, title: &str, created: i64) -> Result<Self, TaskValidationError> {
        if id.as_str().trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            done: false,
            created,
        })
    }

    /// Sets `done` to `force` when given, otherwise flips it.
    pub fn toggle(&mut self, force: Option<bool>) {
        self.done = force.unwrap_or(!self.done);
    }

    /// Returns whether this task still counts toward the pending total.
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}
