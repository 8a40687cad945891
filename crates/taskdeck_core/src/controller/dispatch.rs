//! Row action dispatch table.
//!
//! One entry per action identifier, so a single event path serves every
//! row affordance.

use super::events::EventOutcome;
use crate::model::task::TaskId;
use std::collections::BTreeMap;

/// Handler invoked with the context and the row's task id.
pub type RowHandler<Ctx> = fn(&mut Ctx, &TaskId) -> EventOutcome;

/// Maps action identifiers to row handlers.
pub struct ActionTable<Ctx> {
    handlers: BTreeMap<&'static str, RowHandler<Ctx>>,
}

impl<Ctx> Default for ActionTable<Ctx> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }
}

impl<Ctx> ActionTable<Ctx> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `action`, replacing any previous entry.
    pub fn register(&mut self, action: &'static str, handler: RowHandler<Ctx>) {
        self.handlers.insert(action, handler);
    }

    pub fn get(&self, action: &str) -> Option<RowHandler<Ctx>> {
        self.handlers.get(action).copied()
    }

    /// Registered action identifiers in sorted order.
    pub fn actions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ActionTable;
    use crate::controller::EventOutcome;
    use crate::model::task::TaskId;

    #[derive(Default)]
    struct Counter {
        hits: Vec<String>,
    }

    fn record(ctx: &mut Counter, id: &TaskId) -> EventOutcome {
        ctx.hits.push(id.to_string());
        EventOutcome::Applied
    }

    #[test]
    fn dispatches_registered_actions_only() {
        let mut table: ActionTable<Counter> = ActionTable::new();
        table.register("poke", record);
        let mut ctx = Counter::default();

        let handler = table.get("poke").unwrap();
        assert_eq!(handler(&mut ctx, &TaskId::from("t1")), EventOutcome::Applied);
        assert!(table.get("nope").is_none());
        assert_eq!(ctx.hits, vec!["t1".to_string()]);
        assert_eq!(table.actions().collect::<Vec<_>>(), vec!["poke"]);
    }
}
