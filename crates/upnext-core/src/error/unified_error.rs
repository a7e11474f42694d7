//! UnifiedError trait implementation for UpnextError

use super::types::{UnifiedError, UpnextError};

impl UnifiedError for UpnextError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "UPNEXT_CONFIG",
            Self::StorageUnavailable { .. } => "UPNEXT_STORAGE_UNAVAILABLE",
            Self::StorageCorrupt { .. } => "UPNEXT_STORAGE_CORRUPT",
            Self::Io { .. } => "UPNEXT_IO",
            Self::Json { .. } => "UPNEXT_JSON",
            Self::InvalidInput { .. } => "UPNEXT_INVALID_INPUT",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::StorageUnavailable { message, .. }
            | Self::StorageCorrupt { message, .. }
            | Self::Io { message, .. }
            | Self::Json { message, .. }
            | Self::InvalidInput { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. }
            | Self::Io { context, .. }
            | Self::Json { context, .. } => context.as_deref(),
            Self::StorageUnavailable { path, .. } | Self::StorageCorrupt { path, .. } => {
                path.as_deref()
            }
            Self::InvalidInput { field, .. } => field.as_deref(),
        }
    }
}
