//! Interaction controller.
//!
//! # Responsibility
//! - Translate UI events into repository/view operations.
//! - Re-render after every effective change.
//!
//! # Invariants
//! - One event is handled to completion before the next.
//! - Invalid input is a silent no-op (`EventOutcome::Ignored`).
//! - Bulk clears only run after the surface confirms.

mod dispatch;
mod events;

pub use dispatch::{ActionTable, RowHandler};
pub use events::{EventOutcome, UiEvent};

use crate::clock::Clock;
use crate::model::filter::FilterMode;
use crate::model::task::TaskId;
use crate::render::{build_frame, present, FocusTarget, Surface};
use crate::state::AppState;
use crate::store::KeyValueBackend;
use crate::view::filter::SearchQuery;
use log::{debug, info};

pub const CONFIRM_CLEAR_COMPLETED: &str = "Remove all completed tasks?";
pub const CONFIRM_CLEAR_ALL: &str = "Clear ALL tasks? This cannot be undone.";

/// Owns the state container and the surface it renders onto.
pub struct Controller<B: KeyValueBackend, C: Clock, S: Surface> {
    state: AppState<B, C>,
    surface: S,
    actions: ActionTable<Self>,
}

impl<B: KeyValueBackend, C: Clock, S: Surface> Controller<B, C, S> {
    /// Wires the controller and performs the initial render.
    pub fn new(state: AppState<B, C>, surface: S) -> Self {
        let mut actions: ActionTable<Self> = ActionTable::new();
        actions.register("toggle", Self::toggle_row);
        actions.register("delete", Self::delete_row);

        let mut controller = Self {
            state,
            surface,
            actions,
        };
        let filter = controller.state.filter();
        controller.surface.set_active_filter(filter);
        controller.render(None);
        controller
    }

    pub fn state(&self) -> &AppState<B, C> {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (AppState<B, C>, S) {
        (self.state, self.surface)
    }

    /// Handles one UI event.
    pub fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        let name = event.name();
        let outcome = match event {
            UiEvent::SubmitNewTask(title) => self.submit(&title),
            UiEvent::RowAction { action, id } => match self.actions.get(&action) {
                Some(handler) => handler(self, &id),
                None => EventOutcome::Ignored,
            },
            UiEvent::CheckboxChanged { id, checked } => self.set_done(&id, Some(checked)),
            UiEvent::FilterChipClicked(value) => self.select_filter(&value),
            UiEvent::SearchInput(text) => self.search(&text),
            UiEvent::ClearCompleted => self.clear_completed(),
            UiEvent::ClearAll => self.clear_all(),
            UiEvent::ExitTransitionEnded(id) => self.finish_delete(&id),
        };
        debug!("event=ui_dispatch module=controller name={name} outcome={outcome}");
        outcome
    }

    fn submit(&mut self, title: &str) -> EventOutcome {
        let Some(id) = self.state.repo_mut().add(title) else {
            return EventOutcome::Ignored;
        };
        self.render(Some(&id));
        self.surface.clear_new_task_input();
        self.surface.focus(&FocusTarget::NewTaskInput);
        EventOutcome::Added(id)
    }

    fn toggle_row(&mut self, id: &TaskId) -> EventOutcome {
        self.set_done(id, None)
    }

    fn set_done(&mut self, id: &TaskId, force: Option<bool>) -> EventOutcome {
        if !self.state.repo_mut().toggle(id, force) {
            return EventOutcome::Ignored;
        }
        self.render(None);
        EventOutcome::Applied
    }

    fn delete_row(&mut self, id: &TaskId) -> EventOutcome {
        if self.state.is_pending_removal(id) || self.state.repo().get(id).is_none() {
            return EventOutcome::Ignored;
        }
        if self.surface.begin_exit_transition(id) {
            self.state.mark_for_removal(id);
            return EventOutcome::Deferred;
        }
        self.state.repo_mut().remove(id);
        self.render(None);
        EventOutcome::Applied
    }

    fn finish_delete(&mut self, id: &TaskId) -> EventOutcome {
        if !self.state.finish_removal(id) {
            return EventOutcome::Ignored;
        }
        self.render(None);
        EventOutcome::Applied
    }

    fn select_filter(&mut self, value: &str) -> EventOutcome {
        let Some(mode) = FilterMode::parse(value) else {
            return EventOutcome::Ignored;
        };
        self.state.set_filter(mode);
        self.surface.set_active_filter(mode);
        self.render(None);
        EventOutcome::Applied
    }

    fn search(&mut self, text: &str) -> EventOutcome {
        self.state.set_query(SearchQuery::new(text));
        self.render(None);
        EventOutcome::Applied
    }

    fn clear_completed(&mut self) -> EventOutcome {
        if !self.state.repo().has_completed() {
            return EventOutcome::Ignored;
        }
        if !self.surface.confirm(CONFIRM_CLEAR_COMPLETED) {
            return EventOutcome::Declined;
        }
        let removed = self.state.repo_mut().clear_completed();
        info!("event=clear_completed module=controller status=ok removed={removed}");
        self.state.forget_missing_removals();
        self.render(None);
        EventOutcome::Applied
    }

    fn clear_all(&mut self) -> EventOutcome {
        if self.state.repo().is_empty() {
            return EventOutcome::Ignored;
        }
        if !self.surface.confirm(CONFIRM_CLEAR_ALL) {
            return EventOutcome::Declined;
        }
        let removed = self.state.repo_mut().clear_all();
        info!("event=clear_all module=controller status=ok removed={removed}");
        self.state.forget_missing_removals();
        self.render(None);
        EventOutcome::Applied
    }

    fn render(&mut self, just_added: Option<&TaskId>) {
        self.state.settle_hidden_removals();
        let frame = build_frame(&self.state, just_added);
        present(&frame, &mut self.surface);
    }
}
