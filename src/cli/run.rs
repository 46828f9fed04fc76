//! Command execution for the CLI.

use crate::capture::{self, ScriptedSource, StdinSource, TranscriptSource};
use crate::cli::Command;
use crate::config;
use crate::error::Error;
use crate::interpreter::interpret;
use crate::render::{SnapshotRenderer, TextRenderer};
use crate::session::{Session, UNSUPPORTED_STATUS};
use crate::session_log;
use std::path::Path;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a CLI command.
pub fn run(command: Command) -> CliOutput {
    match command {
        Command::Listen => run_listen(Path::new(".")),
        Command::Say { transcripts } => run_say(&transcripts, Path::new(".")),
        Command::EnsureConfig => run_ensure_config(),
        Command::Version => run_version(),
    }
}

fn run_version() -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![],
        stderr: vec![format!("voicetask v{}", crate::VERSION)],
    }
}

fn run_ensure_config() -> CliOutput {
    match config::ensure_config(Path::new(".")) {
        Ok(cfg) => {
            let messages = vec![
                format!("Config ensured at {}", config::CONFIG_FILE_PATH),
                format!("  locale: {}", cfg.locale),
                format!("  debug_logging: {}", cfg.debug_logging),
            ];
            CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![], stderr: messages }
        }
        Err(e) => CliOutput {
            exit_code: ExitCode::from(1),
            stdout: vec![],
            stderr: vec![format!("Error ensuring config: {e}")],
        },
    }
}

/// Run a fixed list of transcripts through a fresh session.
///
/// Statuses are collected in order, followed by the final list rows. The
/// session lives only for this call.
fn run_say(transcripts: &[String], base_dir: &Path) -> CliOutput {
    let mut source = ScriptedSource::new(transcripts);
    let mut session = Session::new(SnapshotRenderer::new());
    let mut stdout = Vec::new();

    // Capture first: entering the listening state only makes sense for an
    // actual utterance, and end of input must not disturb the last status.
    loop {
        match source.capture() {
            Ok(Some(transcript)) => {
                session.begin_capture();
                session.end_capture();
                if let Err(e) = session.handle_transcript(&transcript) {
                    return error_output(&e);
                }
                log_outcome(&transcript, &session, base_dir);
                if let Some(status) = session.status() {
                    stdout.push(status.to_string());
                }
            }
            Ok(None) => break,
            Err(_) => session.capture_failed(),
        }
    }

    stdout.extend(session.renderer().rows());
    CliOutput { exit_code: ExitCode::SUCCESS, stdout, stderr: vec![] }
}

/// Interactive capture loop over stdin.
///
/// The list is redrawn on stdout after every mutation; statuses go to stderr
/// as they happen, so the returned output carries no buffered messages.
fn run_listen(base_dir: &Path) -> CliOutput {
    let mut source = StdinSource::new();
    if capture::ensure_supported(&source).is_err() {
        // Capability probe failed: the affordance stays disabled for good.
        return CliOutput {
            exit_code: ExitCode::from(1),
            stdout: vec![],
            stderr: vec![UNSUPPORTED_STATUS.to_string()],
        };
    }

    let mut session = Session::new(TextRenderer::stdout());

    loop {
        session.begin_capture();
        if let Some(status) = session.status() {
            eprintln!("{status}");
        }

        match source.capture() {
            Ok(Some(transcript)) => {
                session.end_capture();
                if let Err(e) = session.handle_transcript(&transcript) {
                    return error_output(&e);
                }
                log_outcome(&transcript, &session, base_dir);
                if let Some(status) = session.status() {
                    eprintln!("{status}");
                }
            }
            Ok(None) => {
                session.end_capture();
                break;
            }
            Err(_) => {
                // Failed capture: prompt a retry, keep listening.
                session.capture_failed();
                if let Some(status) = session.status() {
                    eprintln!("{status}");
                }
            }
        }
    }

    CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![], stderr: vec![] }
}

/// Log a handled transcript to the session event log.
///
/// Dropped intents are logged with a null status even though the session
/// still shows the echo status.
fn log_outcome<R: crate::render::ListRenderer>(
    transcript: &str,
    session: &Session<R>,
    base_dir: &Path,
) {
    let status = if interpret(transcript).is_some() { session.status() } else { None };
    session_log::log_event_in(transcript, status, base_dir);
}

fn error_output(e: &Error) -> CliOutput {
    CliOutput {
        exit_code: ExitCode::from(1),
        stdout: vec![],
        stderr: vec![format!("Error: {e}")],
    }
}
