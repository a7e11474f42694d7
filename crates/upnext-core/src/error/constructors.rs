//! Constructor methods for UpnextError

use super::types::UpnextError;

impl UpnextError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a storage-unavailable error for a path
    pub fn storage_unavailable(message: impl Into<String>, path: Option<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            path,
        }
    }

    /// Create a storage-corrupt error for a path
    pub fn storage_corrupt(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::StorageCorrupt {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create an IO error with context
    pub fn io_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: Some(context.into()),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error with field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Attach context to errors that carry it
    pub fn with_context(self, context: impl Into<String>) -> Self {
        let context = Some(context.into());
        match self {
            Self::Config { message, .. } => Self::Config { message, context },
            Self::Io { message, path, .. } => Self::Io {
                message,
                path,
                context,
            },
            Self::Json { message, .. } => Self::Json { message, context },
            other => other,
        }
    }

    /// True when the error means persisted data could not be read as a dataset
    pub fn is_corrupt_storage(&self) -> bool {
        matches!(self, Self::StorageCorrupt { .. })
    }
}
