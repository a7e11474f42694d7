//! From trait implementations for UpnextError conversions

use super::types::UpnextError;

impl From<std::io::Error> for UpnextError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for UpnextError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
