//! # `voicetask`
//!
//! A voice-style task list: transcripts of spoken commands are mapped via
//! keyword matching to add/remove/toggle/list operations on an in-memory
//! task store, with feedback through a single status string.

pub mod capture;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod render;
pub mod session;
pub mod session_log;
pub mod tasks;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
