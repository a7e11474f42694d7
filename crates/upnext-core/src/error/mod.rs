//! Error types for upnext
//!
//! Every fallible operation in the core library returns [`UpnextResult`].
//! Errors carry a stable code (see [`UnifiedError`]) so the CLI can react to
//! specific failure kinds, and can be turned into a [`UserFriendlyError`] for
//! display.

mod constructors;
mod conversions;
mod types;
mod unified_error;
mod user_messages;

pub use types::{UnifiedError, UpnextError, UpnextResult};
pub use user_messages::{ErrorCategory, UserFriendlyError};
