//! Error types for moodscape-core.
//!
//! Only the parsing boundary can fail: unknown enum names and malformed JSON.
//! Numeric values are never rejected, they are clamped.
//!
//! # Examples
//!
//! ```rust
//! use moodscape_core::{CoreError, Emotion};
//!
//! let err = "euphoria".parse::<Emotion>().unwrap_err();
//! assert!(matches!(err, CoreError::UnknownEmotion(_)));
//! assert!(err.to_string().contains("euphoria"));
//! ```

use thiserror::Error;

/// Top-level error type for moodscape-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name one of the eight emotion keys.
    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    /// A string did not name one of the capture sources.
    #[error("Unknown entry source: {0}")]
    UnknownSource(String),

    /// JSON input could not be decoded into entries.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}
