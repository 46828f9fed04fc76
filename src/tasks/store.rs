//! In-memory ordered task store.

use crate::tasks::models::Task;

/// Ordered sequence of tasks plus a monotonically increasing id counter.
///
/// Tasks keep insertion order. Users address tasks by their 1-based display
/// position into the current sequence, not by id, so positions shift when an
/// earlier task is removed. Ids start at 1, strictly increase, and are never
/// reused even after deletion.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new(), next_id: 1 }
    }

    /// Append a new task and return a reference to it.
    pub fn add(&mut self, text: impl Into<String>) -> &Task {
        let task = Task::new(self.next_id, text);
        self.next_id += 1;
        self.tasks.push(task);
        self.tasks.last().expect("just pushed")
    }

    /// Remove the task at the given 1-based position and return it.
    ///
    /// Later tasks shift down one position. Returns `None` without mutating
    /// anything if the position is out of range (0 or greater than the
    /// current length).
    pub fn remove(&mut self, position: u64) -> Option<Task> {
        let index = self.index_of(position)?;
        Some(self.tasks.remove(index))
    }

    /// Flip the completed flag of the task at the given 1-based position.
    ///
    /// Returns the task after the flip, or `None` without mutating anything
    /// if the position is out of range.
    pub fn toggle(&mut self, position: u64) -> Option<&Task> {
        let index = self.index_of(position)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        Some(task)
    }

    /// Get the task at the given 1-based position.
    #[must_use]
    pub fn get(&self, position: u64) -> Option<&Task> {
        self.tasks.get(self.index_of(position)?)
    }

    /// The current ordered sequence of tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently on the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Map a 1-based position to a vec index, or `None` if out of range.
    fn index_of(&self, position: u64) -> Option<usize> {
        let index = usize::try_from(position.checked_sub(1)?).ok()?;
        (index < self.tasks.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("a").id, 1);
        assert_eq!(store.add("b").id, 2);
        assert_eq!(store.add("c").id, 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");
        store.remove(2);
        store.remove(1);
        assert!(store.is_empty());

        let task = store.add("c");
        assert_eq!(task.id, 3);
    }

    #[test]
    fn test_remove_shifts_positions() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");
        store.add("c");

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.text, "a");

        // "b" is now position 1, id unchanged.
        let first = store.get(1).unwrap();
        assert_eq!(first.text, "b");
        assert_eq!(first.id, 2);
        assert_eq!(store.get(2).unwrap().text, "c");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut store = TaskStore::new();
        store.add("a");

        assert!(store.remove(0).is_none());
        assert!(store.remove(2).is_none());
        assert!(store.remove(u64::MAX).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_flips_in_place() {
        let mut store = TaskStore::new();
        store.add("a");

        assert!(store.toggle(1).unwrap().completed);
        assert!(!store.toggle(1).unwrap().completed);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut store = TaskStore::new();
        store.add("a");

        assert!(store.toggle(0).is_none());
        assert!(store.toggle(2).is_none());
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn test_get_empty_store() {
        let store = TaskStore::new();
        assert!(store.get(1).is_none());
        assert!(store.is_empty());
    }

    proptest! {
        #[test]
        fn prop_ids_strictly_increase(texts in proptest::collection::vec("[a-z ]{1,12}", 1..20)) {
            let mut store = TaskStore::new();
            let mut last_id = 0;
            for text in &texts {
                let id = store.add(text.clone()).id;
                prop_assert!(id > last_id);
                last_id = id;
            }
            prop_assert_eq!(store.len(), texts.len());
        }

        #[test]
        fn prop_remove_preserves_order_of_rest(
            count in 1usize..15,
            position_seed in 0usize..15,
        ) {
            let mut store = TaskStore::new();
            for i in 0..count {
                store.add(format!("task {i}"));
            }
            let position = (position_seed % count) as u64 + 1;

            let before: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
            let removed = store.remove(position).unwrap();

            let after: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
            let expected: Vec<u64> =
                before.iter().copied().filter(|id| *id != removed.id).collect();
            prop_assert_eq!(after, expected);
        }

        #[test]
        fn prop_double_toggle_restores(count in 1usize..10, position_seed in 0usize..10) {
            let mut store = TaskStore::new();
            for i in 0..count {
                store.add(format!("task {i}"));
            }
            let position = (position_seed % count) as u64 + 1;

            let before = store.get(position).unwrap().clone();
            store.toggle(position);
            store.toggle(position);
            prop_assert_eq!(store.get(position).unwrap(), &before);
        }

        #[test]
        fn prop_out_of_range_never_mutates(count in 0usize..10, position in 0u64..1000) {
            let mut store = TaskStore::new();
            for i in 0..count {
                store.add(format!("task {i}"));
            }
            prop_assume!(position == 0 || position > count as u64);

            let before = store.tasks().to_vec();
            prop_assert!(store.remove(position).is_none());
            prop_assert!(store.toggle(position).is_none());
            prop_assert_eq!(store.tasks(), before.as_slice());
        }
    }
}
