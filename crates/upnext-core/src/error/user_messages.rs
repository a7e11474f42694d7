//! User-friendly error messages and classification
//!
//! Turns an [`UpnextError`] into a title, message and list of suggested
//! actions that the CLI prints when a one-shot command fails.

use super::types::{UnifiedError, UpnextError};

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration issues
    Configuration,
    /// Data file could not be read or written
    Storage,
    /// File system related errors
    FileSystem,
    /// Invalid user input
    UserInput,
    /// Internal errors
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration Error",
            Self::Storage => "Storage Error",
            Self::FileSystem => "File System Error",
            Self::UserInput => "Invalid Input",
            Self::Internal => "Internal Error",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    /// The error category
    pub category: ErrorCategory,
    /// Short summary
    pub title: String,
    /// Detailed message
    pub message: String,
    /// Suggested actions to resolve the error
    pub suggestions: Vec<String>,
    /// Original technical error code
    pub error_code: String,
}

impl UserFriendlyError {
    /// Create a new user-friendly error
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            error_code: String::new(),
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the technical error code
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = code.into();
        self
    }
}

impl From<&UpnextError> for UserFriendlyError {
    fn from(error: &UpnextError) -> Self {
        let friendly = match error {
            UpnextError::Config { message, .. } => {
                UserFriendlyError::new(ErrorCategory::Configuration, "Invalid configuration", message)
                    .with_suggestion("Check the JSON syntax in your config file")
                    .with_suggestion("Run 'upnext config init --force' to regenerate the defaults")
            }
            UpnextError::StorageUnavailable { message, path } => {
                let mut e = UserFriendlyError::new(
                    ErrorCategory::Storage,
                    "Task storage is unavailable",
                    message,
                );
                if let Some(path) = path {
                    e = e.with_suggestion(format!("Make sure '{}' is writable", path));
                }
                e.with_suggestion("Set UPNEXT_DATA_FILE or pass --data-file to use another location")
            }
            UpnextError::StorageCorrupt { message, path } => {
                let location = path.as_deref().unwrap_or("the data file");
                UserFriendlyError::new(
                    ErrorCategory::Storage,
                    "Task data could not be parsed",
                    message,
                )
                .with_suggestion(format!("Inspect or restore {} from a backup", location))
                .with_suggestion("The file is left untouched; nothing was overwritten")
            }
            UpnextError::Io { message, path, .. } => {
                let mut e =
                    UserFriendlyError::new(ErrorCategory::FileSystem, "File operation failed", message);
                if let Some(path) = path {
                    e = e.with_suggestion(format!("Check permissions for '{}'", path));
                }
                e
            }
            UpnextError::Json { message, .. } => {
                UserFriendlyError::new(ErrorCategory::Internal, "Serialization failed", message)
            }
            UpnextError::InvalidInput { message, .. } => {
                UserFriendlyError::new(ErrorCategory::UserInput, "Invalid input", message)
                    .with_suggestion("Run 'upnext --help' for usage")
            }
        };
        friendly.with_error_code(error.error_code())
    }
}
