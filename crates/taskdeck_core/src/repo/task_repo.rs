//! In-memory task list with write-through persistence.

use crate::clock::{Clock, SystemClock};
use crate::config::ITEMS_KEY;
use crate::model::task::{Task, TaskId};
use crate::store::{KeyValueBackend, PersistentStore};
use log::debug;

/// Ordered task collection, newest first.
pub struct TaskRepository<B: KeyValueBackend, C: Clock = SystemClock> {
    store: PersistentStore<B>,
    clock: C,
    items: Vec<Task>,
}

impl<B: KeyValueBackend, C: Clock> TaskRepository<B, C> {
    /// Loads the persisted list, or starts empty when it is absent or
    /// malformed.
    pub fn load(store: PersistentStore<B>, clock: C) -> Self {
        let items: Vec<Task> = store.read(ITEMS_KEY, Vec::new());
        debug!(
            "event=repo_load module=repo status=ok count={}",
            items.len()
        );
        Self {
            store,
            clock,
            items,
        }
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.items.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of not-done tasks across the whole list.
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|task| task.is_pending()).count()
    }

    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|task| task.done)
    }

    /// Inserts a new pending task at the front and returns its id.
    ///
    /// Returns `None` without touching the list when `title` is blank.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let task = Task::with_id(self.fresh_id(), title, self.clock.now_ms()).ok()?;
        let id = task.id.clone();
        self.items.insert(0, task);
        self.persist();
        debug!("event=task_add module=repo status=ok id={id}");
        Some(id)
    }

    /// Flips `done`, or sets it to `force` when given.
    ///
    /// Returns `false` when no task has `id`.
    pub fn toggle(&mut self, id: &TaskId, force: Option<bool>) -> bool {
        let Some(task) = self.items.iter_mut().find(|task| &task.id == id) else {
            return false;
        };
        task.toggle(force);
        let done = task.done;
        self.persist();
        debug!("event=task_toggle module=repo status=ok id={id} done={done}");
        true
    }

    /// Deletes the task with `id`. Returns `false` when it was not present.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.items.len();
        self.items.retain(|task| &task.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        debug!("event=task_remove module=repo status=ok id={id}");
        true
    }

    /// Removes every task. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        self.persist();
        debug!("event=task_clear module=repo status=ok scope=all removed={removed}");
        removed
    }

    /// Removes every done task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(Task::is_pending);
        let removed = before - self.items.len();
        self.persist();
        debug!("event=task_clear module=repo status=ok scope=completed removed={removed}");
        removed
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        self.store.write(ITEMS_KEY, &self.items);
    }
}
