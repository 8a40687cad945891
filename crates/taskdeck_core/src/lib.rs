//! Core of the taskdeck task list manager.
//!
//! State flows one way: a UI event reaches the [`Controller`], which mutates
//! the [`TaskRepository`], persists through the [`PersistentStore`], and
//! re-renders a [`Frame`] derived by [`current_view`].

pub mod clock;
pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod state;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, ConfigOverrides, FILTER_KEY, ITEMS_KEY};
pub use controller::{Controller, EventOutcome, UiEvent};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::FilterMode;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use render::html::{escape_html, HtmlSurface};
pub use render::{build_frame, FocusTarget, Frame, RowView, Surface};
pub use repo::task_repo::TaskRepository;
pub use state::AppState;
pub use store::{KeyValueBackend, MemoryBackend, PersistentStore, SqliteBackend, StoreError};
pub use view::filter::{current_view, SearchQuery};
pub use view::time_ago::{time_ago, time_ago_secs};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
