//! List rendering boundary.
//!
//! The session calls [`ListRenderer::render`] with the full ordered task
//! sequence after every mutation. Renderers show each task's 1-based
//! position, completed marker, and text; anything a renderer exposes for
//! acting on a row (toggle, remove) re-enters the session's mutation methods
//! by position.

use crate::error::Result;
use crate::tasks::Task;
use std::io::{self, Write};

/// Trait for redrawing the task list view.
pub trait ListRenderer {
    /// Redraw the view from the full current task sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot be written.
    fn render(&mut self, tasks: &[Task]) -> Result<()>;
}

/// Text renderer writing one row per task to any [`Write`] sink.
///
/// Rows look like `2. [x] buy milk`.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to the given sink.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl TextRenderer<io::Stdout> {
    /// Create a renderer writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ListRenderer for TextRenderer<W> {
    fn render(&mut self, tasks: &[Task]) -> Result<()> {
        for (index, task) in tasks.iter().enumerate() {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            writeln!(self.out, "{}. {} {}", index + 1, marker, task.text)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Renderer that keeps only the latest snapshot it was given.
///
/// This mirrors a view that is overwritten on every redraw. The CLI `say`
/// command renders through this and prints the final snapshot once; tests use
/// it to assert on what was displayed.
#[derive(Debug, Default, Clone)]
pub struct SnapshotRenderer {
    latest: Vec<Task>,
}

impl SnapshotRenderer {
    /// Create a renderer with an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: Vec::new() }
    }

    /// The most recently rendered task sequence.
    #[must_use]
    pub fn latest(&self) -> &[Task] {
        &self.latest
    }

    /// Format the latest snapshot as display rows.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.latest
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let marker = if task.completed { "[x]" } else { "[ ]" };
                format!("{}. {} {}", index + 1, marker, task.text)
            })
            .collect()
    }
}

impl ListRenderer for SnapshotRenderer {
    fn render(&mut self, tasks: &[Task]) -> Result<()> {
        self.latest = tasks.to_vec();
        Ok(())
    }
}
