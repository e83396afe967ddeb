//! Unified error types for linkdeck
//!
//! Library layers return [`Result`]; the binary boundary wraps these in
//! `anyhow` and maps them to exit codes.

/// Unified error type for linkdeck operations
#[derive(Debug, thiserror::Error)]
pub enum LinkdeckError {
    /// I/O errors (storage files, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key-value storage errors
    #[error("Storage error: {key} - {reason}")]
    Storage { key: String, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Failure handing a URL to the system browser
    #[error("Open error: {0}")]
    Open(String),

    /// System clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using LinkdeckError
pub type Result<T> = std::result::Result<T, LinkdeckError>;

impl LinkdeckError {
    /// Create a Storage error
    pub fn storage(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an Open error
    pub fn open(msg: impl Into<String>) -> Self {
        Self::Open(msg.into())
    }

    /// Create a Clipboard error
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
