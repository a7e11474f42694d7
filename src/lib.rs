//! upnext
//!
//! Facade over [`upnext_core`] for programs that embed the task list
//! without the command-line front end.

pub use upnext_core::*;
