//! Core error types and traits

use thiserror::Error;

/// Result type alias for upnext operations
pub type UpnextResult<T> = Result<T, UpnextError>;

/// Common surface shared by all upnext errors.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Stable code for programmatic handling
    fn error_code(&self) -> &str;

    /// Human-readable error message
    fn message(&self) -> &str;

    /// Optional context about where the error occurred
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for upnext
#[derive(Error, Debug, Clone)]
pub enum UpnextError {
    /// Configuration file or value problems
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// The data directory cannot be resolved or created
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        message: String,
        path: Option<String>,
    },

    /// The persisted document exists but cannot be parsed
    #[error("Storage corrupt: {message}")]
    StorageCorrupt {
        message: String,
        path: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Rejected user input
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },
}
