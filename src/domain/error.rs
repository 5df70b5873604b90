use std::io;

use thiserror::Error;

/// Library-wide error type for pitchkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required business-profile fields are blank.
    #[error("Business profile incomplete: missing {}", .missing.join(", "))]
    IncompleteProfile { missing: Vec<String> },

    /// Tone value outside the supported set.
    #[error(
        "Invalid tone '{0}': must be one of Friendly, Formal, Bold, Consultative, Professional, Confident"
    )]
    InvalidTone(String),

    /// Comfort level outside the 0-10 range.
    #[error("Invalid comfort level {0}: must be between 0 and 10")]
    InvalidComfortLevel(u8),

    /// Profile file could not be parsed.
    #[error("Failed to parse profile file {path}: {reason}")]
    ProfileParse { path: String, reason: String },

    /// Config file could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    /// Prompt template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Document export failed; the generated text remains available.
    #[error("Failed to export document to {path}: {reason}")]
    Export { path: String, reason: String },

    /// Interactive input could not be read.
    #[error("{0}")]
    Input(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Typed failure from the completion backend.
///
/// Backend failures are data, not control flow: the toolkit assembler records
/// them per-section and the submission still completes with a partial toolkit.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Credential rejected by the backend.
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// Backend quota exhausted.
    #[error("Rate limited by completion backend (429)")]
    RateLimited,

    /// Backend-side failure.
    #[error("Completion backend server error ({0})")]
    Server(u16),

    /// Any other non-success status.
    #[error("Completion backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Malformed completion response: {0}")]
    InvalidResponse(String),

    /// Backend returned no completion choices.
    #[error("Completion backend returned no content")]
    EmptyCompletion,
}
