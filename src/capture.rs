//! Transcript capture boundary.
//!
//! A [`TranscriptSource`] stands in for the speech recognizer: it delivers
//! one lowercased, trimmed transcript per capture session, or signals end of
//! input or a capture failure. Continuous and interim results do not exist
//! here; each call is a single final utterance.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

/// Trait for producing normalized transcripts.
pub trait TranscriptSource {
    /// Capability probe, checked once at startup.
    ///
    /// When this returns `false` the capture affordance is never wired up:
    /// the listen loop refuses to start with a one-time unsupported status.
    fn probe(&self) -> bool;

    /// Run one capture session.
    ///
    /// Returns `Ok(Some(transcript))` for a final utterance, `Ok(None)` when
    /// the source is exhausted, and `Err` for a failed session. A failed
    /// session leaves no trace; the caller may simply capture again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Capture`] when the session ends in error.
    fn capture(&mut self) -> Result<Option<String>>;
}

/// Lowercase and trim one raw utterance.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Run the capability probe, turning a failure into an error.
///
/// # Errors
///
/// Returns [`Error::CaptureUnsupported`] when the probe fails; the caller is
/// expected to disable the capture affordance permanently.
pub fn ensure_supported<S: TranscriptSource>(source: &S) -> Result<()> {
    if source.probe() {
        Ok(())
    } else {
        Err(Error::CaptureUnsupported)
    }
}

/// Transcript source reading lines from standard input.
///
/// The capability probe requires an interactive terminal, the closest
/// analogue of a browser reporting whether a speech recognizer exists at all.
#[derive(Debug, Default, Clone)]
pub struct StdinSource;

impl StdinSource {
    /// Create a stdin-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TranscriptSource for StdinSource {
    fn probe(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn capture(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::Capture(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(normalize(&line)))
    }
}

/// Transcript source replaying a fixed list of utterances.
///
/// Used by the CLI `say` command and by tests. Utterances are normalized the
/// same way spoken input would be.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    remaining: VecDeque<String>,
}

impl ScriptedSource {
    /// Create a source that will replay the given utterances in order.
    pub fn new<I, S>(utterances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { remaining: utterances.into_iter().map(|u| normalize(u.as_ref())).collect() }
    }
}

impl TranscriptSource for ScriptedSource {
    fn probe(&self) -> bool {
        true
    }

    fn capture(&mut self) -> Result<Option<String>> {
        Ok(self.remaining.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Add Buy MILK \n"), "add buy milk");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_ensure_supported() {
        struct Denied;
        impl TranscriptSource for Denied {
            fn probe(&self) -> bool {
                false
            }
            fn capture(&mut self) -> Result<Option<String>> {
                Ok(None)
            }
        }

        assert!(matches!(ensure_supported(&Denied), Err(Error::CaptureUnsupported)));
        assert!(ensure_supported(&ScriptedSource::default()).is_ok());
    }

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new(["Add milk", "LIST"]);
        assert!(source.probe());
        assert_eq!(source.capture().unwrap(), Some("add milk".to_string()));
        assert_eq!(source.capture().unwrap(), Some("list".to_string()));
        assert_eq!(source.capture().unwrap(), None);
        // Stays exhausted.
        assert_eq!(source.capture().unwrap(), None);
    }
}
