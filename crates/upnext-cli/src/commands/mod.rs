//! CLI commands

pub mod add;
pub mod config;
pub mod list;

pub use add::AddOptions;
