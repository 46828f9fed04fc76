//! Debug session event logging.
//!
//! When `debug_logging` is enabled in the config, every handled transcript is
//! appended as a JSONL line to `.voicetask/session-events.jsonl`, together
//! with the status it produced. This allows inspecting exactly what the
//! interpreter heard and decided.

use crate::config::{self, AppConfig};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Log file name within the data directory.
const SESSION_EVENTS_FILE: &str = "session-events.jsonl";

/// Log a handled transcript if debug logging is enabled.
///
/// `status` is the status string the transcript produced, or `None` for a
/// dropped intent. Errors are silently ignored — logging must never affect
/// task state or the capture loop.
pub fn log_event_in(transcript: &str, status: Option<&str>, base_dir: &Path) {
    let Ok(Some(cfg)) = AppConfig::load_from(base_dir) else {
        return;
    };

    if !cfg.debug_logging {
        return;
    }

    write_event(transcript, status, base_dir);
}

/// Write the event to the log file.
fn write_event(transcript: &str, status: Option<&str>, base_dir: &Path) {
    let data_dir = config::data_dir(base_dir);

    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join(SESSION_EVENTS_FILE);

    let entry = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "transcript": transcript,
        "status": status,
    });

    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let _ = writeln!(file, "{entry}");
}
