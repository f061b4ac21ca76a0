//! Analytics error types.
//!
//! The computations in this crate never fail: degenerate input (empty lists,
//! all-zero signals, empty weeks) has documented fallback values. Errors come
//! only from the configuration layer and the JSON boundary.

use moodscape_core::CoreError;
use thiserror::Error;

/// Errors raised at the edges of the analytics engine.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Configuration failed to load or validate
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error bubbled up from the domain types
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for AnalyticsError {
    fn from(err: config::ConfigError) -> Self {
        AnalyticsError::ConfigError(err.to_string())
    }
}

impl AnalyticsError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        AnalyticsError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
