//! Error types for `voicetask`.

/// Errors that can occur while capturing, rendering, or configuring.
///
/// Bad task positions and unrecognized commands are deliberately NOT errors:
/// they are ordinary outcomes reported through the session status string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transcript capture is not available in this environment.
    #[error("transcript capture is not supported in this environment")]
    CaptureUnsupported,

    /// A capture session ended in error. Recoverable by starting a new one.
    #[error("capture failed: {0}")]
    Capture(String),

    /// An I/O error occurred (usually while rendering the list).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
