//! Session layer: applies intents to the task store and tracks feedback.
//!
//! A [`Session`] owns the [`TaskStore`], the renderer, the single current
//! status string, and the listening flag. Everything runs synchronously; one
//! transcript is fully interpreted, applied, and rendered before the next
//! capture begins.

use crate::error::Result;
use crate::interpreter::{interpret, Intent};
use crate::render::ListRenderer;
use crate::tasks::{Task, TaskStore};

/// Status shown while a capture session is running.
pub const LISTENING_STATUS: &str = "I'm listening...";

/// Status shown when a capture session ends in error.
pub const RETRY_STATUS: &str = "Oops, I didn't catch that. Can you try again?";

/// Status shown when the capability probe fails at startup.
pub const UNSUPPORTED_STATUS: &str =
    "Sorry, voice commands aren't available here. Try an interactive terminal.";

/// Status shown when listing an empty task list.
pub const EMPTY_LIST_STATUS: &str = "Your task list is empty!";

/// Fixed help status shown for unrecognized commands.
pub const HELP_STATUS: &str =
    "I'm not sure what you want me to do. Try saying 'add [task]' or 'complete task 1'";

/// State of the capture affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No capture session is running.
    #[default]
    Idle,
    /// A capture session is running. Double-activation while listening is
    /// undefined and not guarded.
    Listening,
}

/// One voice task list session.
///
/// The mutation methods are re-entrant by design: the interpreter dispatch
/// calls them, and so does anything the renderer exposes for acting on a row
/// by position.
#[derive(Debug)]
pub struct Session<R: ListRenderer> {
    store: TaskStore,
    renderer: R,
    status: Option<String>,
    capture_state: CaptureState,
}

impl<R: ListRenderer> Session<R> {
    /// Create a session with an empty task list.
    pub fn new(renderer: R) -> Self {
        Self { store: TaskStore::new(), renderer, status: None, capture_state: CaptureState::Idle }
    }

    /// Mark the start of a capture session.
    pub fn begin_capture(&mut self) {
        self.capture_state = CaptureState::Listening;
        self.status = Some(LISTENING_STATUS.to_string());
    }

    /// Mark the end of a capture session (result delivered or input ended).
    pub fn end_capture(&mut self) {
        self.capture_state = CaptureState::Idle;
    }

    /// Record a failed capture session. The store is untouched and the user
    /// is prompted to retry.
    pub fn capture_failed(&mut self) {
        self.capture_state = CaptureState::Idle;
        self.status = Some(RETRY_STATUS.to_string());
    }

    /// Handle one normalized transcript: echo it, interpret it, and apply
    /// the resulting intent.
    ///
    /// A dropped intent (command keyword with no argument) leaves the echo
    /// status in place and mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a re-render fails.
    pub fn handle_transcript(&mut self, transcript: &str) -> Result<()> {
        self.status = Some(format!("I heard: \"{transcript}\""));
        match interpret(transcript) {
            Some(intent) => self.apply(intent),
            None => Ok(()),
        }
    }

    /// Apply an already-interpreted intent.
    ///
    /// # Errors
    ///
    /// Returns an error if a re-render fails.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::AddTask(text) => self.add_task(&text),
            Intent::RemoveTask(position) => self.remove_task(position),
            Intent::ToggleTask(position) => self.toggle_task(position),
            Intent::ListTasks => {
                self.show_tasks();
                Ok(())
            }
            Intent::Unrecognized => {
                self.status = Some(HELP_STATUS.to_string());
                Ok(())
            }
        }
    }

    /// Append a new task and confirm it.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-render fails.
    pub fn add_task(&mut self, text: &str) -> Result<()> {
        self.store.add(text);
        self.refresh()?;
        self.status = Some(format!("Added: \"{text}\""));
        Ok(())
    }

    /// Remove the task at a 1-based position.
    ///
    /// Out-of-range positions mutate nothing and report a not-found status.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-render fails.
    pub fn remove_task(&mut self, position: u64) -> Result<()> {
        match self.store.remove(position) {
            Some(task) => {
                self.refresh()?;
                self.status = Some(format!("Removed: \"{}\"", task.text));
            }
            None => {
                self.status = Some(format!("Couldn't find task {position}"));
            }
        }
        Ok(())
    }

    /// Flip the completed flag of the task at a 1-based position.
    ///
    /// Out-of-range positions mutate nothing and report a not-found status.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-render fails.
    pub fn toggle_task(&mut self, position: u64) -> Result<()> {
        match self.store.toggle(position).map(|task| task.completed) {
            Some(completed) => {
                self.refresh()?;
                let action = if completed { "completed" } else { "marked as not done" };
                self.status = Some(format!("Task {position} {action}"));
            }
            None => {
                self.status = Some(format!("Couldn't find task {position}"));
            }
        }
        Ok(())
    }

    /// Report the task count. The list itself is only shown visually.
    pub fn show_tasks(&mut self) {
        self.status = Some(if self.store.is_empty() {
            EMPTY_LIST_STATUS.to_string()
        } else {
            format!("You have {} task(s)", self.store.len())
        });
    }

    /// The current ordered task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// The current status string, if any outcome has produced one yet.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The current state of the capture affordance.
    #[must_use]
    pub const fn capture_state(&self) -> CaptureState {
        self.capture_state
    }

    /// Access the renderer (for snapshot-style renderers).
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    fn refresh(&mut self) -> Result<()> {
        self.renderer.render(self.store.tasks())
    }
}
