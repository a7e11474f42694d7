//! Task operations
//!
//! Mutations on the full [`Dataset`]. Every operation addresses records by
//! identifier, never by an index into a filtered view, and leaves active
//! positions dense (`0..len` in list order).

use crate::model::{ArchivedTodo, Dataset, NewTodo, Todo, generate_id};
use chrono::Utc;
use tracing::debug;

impl Dataset {
    /// Add a task at the front of the list.
    ///
    /// Text is trimmed; empty text is rejected without error and returns
    /// `None`.
    pub fn add(&mut self, new: NewTodo) -> Option<&Todo> {
        let text = new.text.trim();
        if text.is_empty() {
            debug!("Ignoring add with empty text");
            return None;
        }

        let todo = Todo {
            id: generate_id(),
            text: text.to_string(),
            description: new.description,
            priority: new.priority,
            created: Utc::now(),
            position: 0,
            context: new.context,
        };
        debug!(id = %todo.id, context = %todo.context, "Adding task");

        self.prepend(todo);
        self.items.first()
    }

    /// Move an active task to the archive.
    ///
    /// Returns false when no active task has this identifier.
    pub fn complete(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            debug!(id, "Complete: no active task with this id");
            return false;
        };

        let todo = self.items.remove(index);
        self.archive.push(todo.into_archived(Utc::now()));
        self.stats.total_completed += 1;
        self.reindex_positions();

        debug!(id, total_completed = self.stats.total_completed, "Completed task");
        true
    }

    /// Move an archived task back to the front of the active list.
    ///
    /// Lifetime completion count is left unchanged.
    pub fn uncomplete(&mut self, id: &str) -> bool {
        let Some(index) = self.archive.iter().position(|item| item.id == id) else {
            debug!(id, "Uncomplete: no archived task with this id");
            return false;
        };

        let archived: ArchivedTodo = self.archive.remove(index);
        self.prepend(archived.into_active());

        debug!(id, "Restored task from archive");
        true
    }

    /// Permanently delete a task from the active list or the archive.
    ///
    /// Unknown identifiers are a no-op. Stats are never touched.
    pub fn drop_task(&mut self, id: &str, from_archive: bool) -> bool {
        let removed = if from_archive {
            let before = self.archive.len();
            self.archive.retain(|item| item.id != id);
            self.archive.len() != before
        } else {
            let before = self.items.len();
            self.items.retain(|item| item.id != id);
            let removed = self.items.len() != before;
            if removed {
                self.reindex_positions();
            }
            removed
        };

        debug!(id, from_archive, removed, "Drop task");
        removed
    }

    /// Move an active task to position 0.
    ///
    /// No-op for lists shorter than two, unknown ids, or a task that is
    /// already first.
    pub fn bump(&mut self, id: &str) -> bool {
        if self.items.len() <= 1 {
            return false;
        }

        match self.items.iter().position(|item| item.id == id) {
            Some(0) | None => false,
            Some(index) => {
                let todo = self.items.remove(index);
                self.items.insert(0, todo);
                self.reindex_positions();
                debug!(id, from = index, "Bumped task to top");
                true
            }
        }
    }

    fn prepend(&mut self, mut todo: Todo) {
        for item in &mut self.items {
            item.position += 1;
        }
        todo.position = 0;
        self.items.insert(0, todo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn texts(data: &Dataset) -> Vec<&str> {
        data.items.iter().map(|t| t.text.as_str()).collect()
    }

    fn positions(data: &Dataset) -> Vec<usize> {
        data.items.iter().map(|t| t.position).collect()
    }

    fn id_of(data: &Dataset, text: &str) -> String {
        data.items
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_prepends_and_shifts() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("first"));
        data.add(NewTodo::new("second"));

        assert_eq!(texts(&data), vec!["second", "first"]);
        assert_eq!(positions(&data), vec![0, 1]);
    }

    #[test]
    fn test_add_keeps_fields() {
        let mut data = Dataset::new();
        let added = data
            .add(
                NewTodo::new("deploy")
                    .with_description("staging first")
                    .with_priority(Priority::High)
                    .with_context("/srv/app"),
            )
            .cloned()
            .unwrap();
        assert_eq!(added.position, 0);
        assert_eq!(added.description, "staging first");
        assert_eq!(added.priority, Priority::High);
        assert_eq!(added.context, "/srv/app");
    }

    #[test]
    fn test_add_empty_text_is_rejected() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("keep"));
        assert!(data.add(NewTodo::new("")).is_none());
        assert!(data.add(NewTodo::new(" \t ")).is_none());
        assert_eq!(texts(&data), vec!["keep"]);
        assert_eq!(positions(&data), vec![0]);
    }

    #[test]
    fn test_add_trims_text() {
        let mut data = Dataset::new();
        let added = data.add(NewTodo::new("  pad me ")).cloned().unwrap();
        assert_eq!(added.text, "pad me");
        assert_eq!(texts(&data), vec!["pad me"]);
    }

    #[test]
    fn test_complete_moves_to_archive() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("first"));
        data.add(NewTodo::new("second"));

        let id = id_of(&data, "second");
        assert!(data.complete(&id));

        assert_eq!(texts(&data), vec!["first"]);
        assert_eq!(positions(&data), vec![0]);
        assert_eq!(data.archive.len(), 1);
        assert_eq!(data.archive[0].text, "second");
        assert_eq!(data.stats.total_completed, 1);
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let mut data = Dataset::new();
        assert!(!data.complete("missing"));
        data.add(NewTodo::new("a"));
        assert!(!data.complete("missing"));
        assert_eq!(data.stats.total_completed, 0);
    }

    #[test]
    fn test_complete_uncomplete_round_trip() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("older"));
        data.add(
            NewTodo::new("target")
                .with_description("details")
                .with_priority(Priority::Low)
                .with_context("/home/me/proj"),
        );
        data.add(NewTodo::new("newest"));

        let original = data.find_todo(&id_of(&data, "target")).cloned().unwrap();
        assert!(data.complete(&original.id));
        let after_complete = data.stats.total_completed;

        assert!(data.uncomplete(&original.id));
        let restored = data.items.first().unwrap();
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.text, original.text);
        assert_eq!(restored.description, original.description);
        assert_eq!(restored.priority, original.priority);
        assert_eq!(restored.context, original.context);
        assert_eq!(restored.created, original.created);
        assert_eq!(restored.position, 0);

        assert!(data.archive.is_empty());
        assert_eq!(data.stats.total_completed, after_complete);
        assert!(data.positions_are_dense());
    }

    #[test]
    fn test_drop_active_and_archived() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("a"));
        data.add(NewTodo::new("b"));
        data.add(NewTodo::new("c"));

        let b = id_of(&data, "b");
        assert!(data.drop_task(&b, false));
        assert_eq!(texts(&data), vec!["c", "a"]);
        assert_eq!(positions(&data), vec![0, 1]);

        let c = id_of(&data, "c");
        data.complete(&c);
        let stats = data.stats;
        assert!(data.drop_task(&c, true));
        assert!(data.archive.is_empty());
        assert_eq!(data.stats, stats);
    }

    #[test]
    fn test_drop_unknown_id_changes_nothing() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("a"));
        data.add(NewTodo::new("b"));
        let a = id_of(&data, "a");
        data.complete(&a);
        let before = data.clone();

        assert!(!data.drop_task("nope", false));
        assert!(!data.drop_task("nope", true));
        assert_eq!(data, before);
    }

    #[test]
    fn test_drop_does_not_cross_lists() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("a"));
        let a = id_of(&data, "a");
        assert!(!data.drop_task(&a, true));
        assert_eq!(data.items.len(), 1);
    }

    #[test]
    fn test_bump_moves_to_front() {
        let mut data = Dataset::new();
        data.add(NewTodo::new("c"));
        data.add(NewTodo::new("b"));
        data.add(NewTodo::new("a"));

        let c = id_of(&data, "c");
        assert!(data.bump(&c));
        assert_eq!(texts(&data), vec!["c", "a", "b"]);
        assert_eq!(positions(&data), vec![0, 1, 2]);
        assert_eq!(data.find_todo(&c).unwrap().id, c);
    }

    #[test]
    fn test_bump_noops() {
        let mut data = Dataset::new();
        assert!(!data.bump("x"));
        data.add(NewTodo::new("only"));
        let only = id_of(&data, "only");
        assert!(!data.bump(&only));
        data.add(NewTodo::new("top"));
        let top = id_of(&data, "top");
        assert!(!data.bump(&top));
        assert!(!data.bump("unknown"));
        assert_eq!(texts(&data), vec!["top", "only"]);
    }

    #[test]
    fn test_positions_stay_dense_through_mixed_sequence() {
        let mut data = Dataset::new();
        for i in 0..6 {
            data.add(NewTodo::new(format!("t{}", i)));
            assert!(data.positions_are_dense());
        }

        let t2 = id_of(&data, "t2");
        let t4 = id_of(&data, "t4");
        let t0 = id_of(&data, "t0");

        data.complete(&t2);
        assert!(data.positions_are_dense());
        data.bump(&t0);
        assert!(data.positions_are_dense());
        data.complete(&t4);
        assert!(data.positions_are_dense());
        data.uncomplete(&t2);
        assert!(data.positions_are_dense());
        data.drop_task(&t0, false);
        assert!(data.positions_are_dense());
        data.uncomplete(&t4);
        assert!(data.positions_are_dense());

        assert_eq!(data.items.len(), 5);
        assert_eq!(data.items[0].id, t4);
        assert_eq!(data.stats.total_completed, 2);
    }
}
