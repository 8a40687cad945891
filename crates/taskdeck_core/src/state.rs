//! Explicit application state container.
//!
//! # Responsibility
//! - Own the repository, filter mode, search query and pending removals.
//! - Persist the filter mode independently of the task list.
//!
//! # Invariants
//! - The search query is never persisted.
//! - Every id in `pending_removals` refers to a task still in the repository.

use crate::clock::Clock;
use crate::config::FILTER_KEY;
use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::store::{KeyValueBackend, PersistentStore};
use crate::view::filter::{current_view, SearchQuery};
use std::collections::BTreeSet;

/// Everything the controller mutates and the renderer reads.
pub struct AppState<B: KeyValueBackend, C: Clock> {
    repo: TaskRepository<B, C>,
    store: PersistentStore<B>,
    filter: FilterMode,
    query: SearchQuery,
    pending_removals: BTreeSet<TaskId>,
}

impl<B: KeyValueBackend + Clone, C: Clock> AppState<B, C> {
    /// Loads the task list and filter mode from `store`.
    pub fn load(store: PersistentStore<B>, clock: C) -> Self {
        let repo = TaskRepository::load(store.clone(), clock);
        let filter = store.read(FILTER_KEY, FilterMode::default());
        Self {
            repo,
            store,
            filter,
            query: SearchQuery::default(),
            pending_removals: BTreeSet::new(),
        }
    }
}

impl<B: KeyValueBackend, C: Clock> AppState<B, C> {
    pub fn repo(&self) -> &TaskRepository<B, C> {
        &self.repo
    }

    pub fn repo_mut(&mut self) -> &mut TaskRepository<B, C> {
        &mut self.repo
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Sets and persists the filter mode.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.store.write(FILTER_KEY, &mode);
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: SearchQuery) {
        self.query = query;
    }

    /// Current display list.
    pub fn view(&self) -> Vec<&Task> {
        current_view(self.repo.items(), self.filter, &self.query)
    }

    pub fn now_ms(&self) -> i64 {
        self.repo.clock().now_ms()
    }

    pub fn is_pending_removal(&self, id: &TaskId) -> bool {
        self.pending_removals.contains(id)
    }

    /// Marks `id` for removal once its exit transition finishes.
    ///
    /// Returns `false` when the id is unknown or already marked.
    pub fn mark_for_removal(&mut self, id: &TaskId) -> bool {
        if self.repo.get(id).is_none() {
            return false;
        }
        self.pending_removals.insert(id.clone())
    }

    /// Completes a pending removal. Returns `false` when `id` was not marked.
    pub fn finish_removal(&mut self, id: &TaskId) -> bool {
        if !self.pending_removals.remove(id) {
            return false;
        }
        self.repo.remove(id)
    }

    /// Removes marked tasks that are no longer displayed. Their transition
    /// can never finish, so the removal happens now.
    pub fn settle_hidden_removals(&mut self) -> usize {
        if self.pending_removals.is_empty() {
            return 0;
        }
        // Why: a full re-render drops the row whose exit transition was
        // running, so no end signal will ever arrive for it.
        let visible: BTreeSet<TaskId> = self
            .view()
            .into_iter()
            .map(|task| task.id.clone())
            .collect();
        let hidden: Vec<TaskId> = self
            .pending_removals
            .iter()
            .filter(|id| !visible.contains(*id))
            .cloned()
            .collect();
        for id in &hidden {
            self.finish_removal(id);
        }
        hidden.len()
    }

    /// Drops pending marks for ids that no longer exist.
    pub fn forget_missing_removals(&mut self) {
        let repo = &self.repo;
        self.pending_removals.retain(|id| repo.get(id).is_some());
    }
}
