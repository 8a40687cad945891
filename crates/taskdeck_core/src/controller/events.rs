//! UI events and their outcomes.

use crate::model::task::TaskId;
use std::fmt::{Display, Formatter};

/// Input delivered by a presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// New-task form submitted with the raw input text.
    SubmitNewTask(String),
    /// Row affordance activated; `action` is its action identifier
    /// (`toggle` or `delete`).
    RowAction { action: String, id: TaskId },
    /// Row checkbox changed to `checked`.
    CheckboxChanged { id: TaskId, checked: bool },
    /// Filter chip clicked with its raw filter value.
    FilterChipClicked(String),
    /// Search box content changed.
    SearchInput(String),
    ClearCompleted,
    ClearAll,
    /// Exit transition of a deleted row finished.
    ExitTransitionEnded(TaskId),
}

impl UiEvent {
    pub fn toggle(id: impl Into<TaskId>) -> Self {
        Self::RowAction {
            action: "toggle".to_string(),
            id: id.into(),
        }
    }

    pub fn delete(id: impl Into<TaskId>) -> Self {
        Self::RowAction {
            action: "delete".to_string(),
            id: id.into(),
        }
    }

    /// Stable name used in log lines. Never includes user text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitNewTask(_) => "submit_new_task",
            Self::RowAction { .. } => "row_action",
            Self::CheckboxChanged { .. } => "checkbox_changed",
            Self::FilterChipClicked(_) => "filter_chip_clicked",
            Self::SearchInput(_) => "search_input",
            Self::ClearCompleted => "clear_completed",
            Self::ClearAll => "clear_all",
            Self::ExitTransitionEnded(_) => "exit_transition_ended",
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A task was created.
    Added(TaskId),
    /// State changed and the surface was re-rendered.
    Applied,
    /// Removal waits for `UiEvent::ExitTransitionEnded`.
    Deferred,
    /// The user declined the confirmation prompt.
    Declined,
    /// Invalid or redundant input; nothing happened.
    Ignored,
}

impl Display for EventOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added(_) => write!(f, "added"),
            Self::Applied => write!(f, "applied"),
            Self::Deferred => write!(f, "deferred"),
            Self::Declined => write!(f, "declined"),
            Self::Ignored => write!(f, "ignored"),
        }
    }
}
