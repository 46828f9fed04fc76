//! Command-line interface for voicetask.
//!
//! Two ways in: an interactive `listen` loop that treats typed lines as
//! spoken utterances, and a one-shot `say` that runs a fixed list of
//! transcripts through a fresh session.

mod run;

pub use run::{run, CliOutput};

use clap::{Parser, Subcommand};

/// Voicetask CLI - a command-driven task list.
///
/// Commands are interpreted the way spoken ones would be: "add buy milk",
/// "complete task 1", "remove 2", "list".
#[derive(Parser, Debug)]
#[command(name = "voicetask")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive capture loop.
    ///
    /// Each line you type is treated as one utterance; the list is redrawn
    /// after every change. Requires an interactive terminal. End input
    /// (Ctrl-D) to stop.
    Listen,

    /// Run one or more transcripts through a fresh session.
    ///
    /// Each argument is one utterance. Statuses are printed in order,
    /// followed by the final list. The session is not persisted.
    Say {
        /// The utterances to interpret, in order.
        #[arg(required = true)]
        transcripts: Vec<String>,
    },

    /// Ensure the config file exists (create with defaults if not).
    #[command(name = "ensure-config")]
    EnsureConfig,

    /// Show version information.
    Version,
}
