//! Frame construction.

use crate::clock::Clock;
use crate::model::task::{Task, TaskId};
use crate::state::AppState;
use crate::store::KeyValueBackend;
use crate::view::time_ago::time_ago;
use chrono::{Local, TimeZone};

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Element that should receive input focus after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// The completion toggle of one row.
    RowToggle(TaskId),
    /// The new-task text input.
    NewTaskInput,
}

/// One displayed task.
///
/// `title` is raw user text; surfaces must escape it for their medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    /// Relative label, e.g. "3 minutes ago".
    pub age_label: String,
    /// Absolute local creation time.
    pub created_label: String,
    /// Row is playing its exit transition.
    pub exiting: bool,
}

impl RowView {
    /// Label of the toggle affordance for the row's current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.done {
            "Mark as pending"
        } else {
            "Mark as completed"
        }
    }

    /// Accessible label of the row checkbox.
    pub fn checkbox_label(&self) -> &'static str {
        if self.done {
            "Mark task as pending"
        } else {
            "Mark task as completed"
        }
    }
}

/// Complete visible state produced by one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<RowView>,
    pub empty_state_visible: bool,
    pub pending_count: usize,
    pub focus: Option<FocusTarget>,
}

/// Derives the frame for the current state.
///
/// When `just_added` names a displayed row, its toggle receives focus.
pub fn build_frame<B: KeyValueBackend, C: Clock>(
    state: &AppState<B, C>,
    just_added: Option<&TaskId>,
) -> Frame {
    let now_ms = state.now_ms();
    let rows: Vec<RowView> = state
        .view()
        .into_iter()
        .map(|task| row_view(task, now_ms, state.is_pending_removal(&task.id)))
        .collect();

    let focus = just_added
        .filter(|id| rows.iter().any(|row| &row.id == *id))
        .map(|id| FocusTarget::RowToggle(id.clone()));

    Frame {
        empty_state_visible: rows.is_empty(),
        pending_count: state.repo().pending_count(),
        rows,
        focus,
    }
}

fn row_view(task: &Task, now_ms: i64, exiting: bool) -> RowView {
    RowView {
        id: task.id.clone(),
        title: task.title.clone(),
        done: task.done,
        age_label: time_ago(task.created, now_ms),
        created_label: format_created(task.created),
        exiting,
    }
}

fn format_created(created_ms: i64) -> String {
    Local
        .timestamp_millis_opt(created_ms)
        .single()
        .map(|created| created.format(CREATED_FORMAT).to_string())
        .unwrap_or_default()
}
