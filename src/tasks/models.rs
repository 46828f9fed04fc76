//! Task model for the voice task list.

use serde::{Deserialize, Serialize};

/// A single task on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation and never reused.
    ///
    /// Note that the id is not what users refer to tasks by: spoken commands
    /// use the 1-based display position, which shifts after removals.
    pub id: u64,
    /// The task text as spoken (non-empty).
    pub text: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), completed: false }
    }
}
