//! Error handling module for Merch
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Guard and transition errors from the demo layer convert into [`MerchError`].

use thiserror::Error;

/// Main error type for Merch
#[derive(Error, Debug)]
pub enum MerchError {
    /// IO errors (terminal, playback output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration values out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Demo state errors (rejected submissions, invalid step transitions)
    #[error("State error: {0}")]
    State(String),
}

/// Result type alias for Merch operations
pub type Result<T> = std::result::Result<T, MerchError>;

impl MerchError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}
