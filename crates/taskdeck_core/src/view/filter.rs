//! Display list derivation from tasks, filter mode and search query.

use crate::model::filter::FilterMode;
use crate::model::task::Task;

/// Normalized, transient search text.
///
/// Stored trimmed and lower-cased; empty means "no text filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(input: &str) -> Self {
        Self(input.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match on the title.
    pub fn matches(&self, task: &Task) -> bool {
        self.is_empty() || task.title.to_lowercase().contains(self.0.as_str())
    }
}

/// Returns the display list: tasks matching `query`, then `mode`, in
/// repository order.
pub fn current_view<'a>(items: &'a [Task], mode: FilterMode, query: &SearchQuery) -> Vec<&'a Task> {
    items
        .iter()
        .filter(|task| query.matches(task))
        .filter(|task| mode.matches(task))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;

    #[test]
    fn search_query_is_trimmed_and_lowercased() {
        let query = SearchQuery::new("  MiLk ");
        assert_eq!(query.as_str(), "milk");
        assert!(!query.is_empty());
        assert!(SearchQuery::new("   ").is_empty());
    }
}
