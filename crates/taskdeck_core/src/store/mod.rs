//! Durable key/value store for persisted view state.
//!
//! # Responsibility
//! - Abstract the durable backend behind `KeyValueBackend`.
//! - Provide best-effort JSON `read`/`write` through `PersistentStore`.
//!
//! # Invariants
//! - Reads never fail: absent, empty or malformed values yield the fallback.
//! - Writes never fail outward: backend errors are logged and swallowed.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod backend;
mod persistent;

pub use backend::{KeyValueBackend, MemoryBackend, SqliteBackend};
pub use persistent::PersistentStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backend-level failure. Only visible to backend callers, never to
/// `PersistentStore` users.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Write would exceed the configured storage quota.
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        quota_bytes: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required_bytes} bytes > {quota_bytes} bytes"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
