//! Error types for reading symbol records.

use thiserror::Error;

/// Errors that can occur while converting JSON into symbols.
///
/// Accessors and predicates never fail; only the conversions return these.
#[derive(Debug, Error)]
pub enum DocsymError {
    /// JSON parsing or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input has the wrong shape for a symbol record.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl DocsymError {
    /// Create an invalid record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "record",
            message: message.into(),
        }
    }
}

/// Result alias for conversion operations.
pub type Result<T, E = DocsymError> = std::result::Result<T, E>;
