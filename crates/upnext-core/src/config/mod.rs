//! Configuration management for upnext

pub mod loader;
pub mod model;
pub mod paths;

pub use loader::{ConfigLoader, ConfigSource, load_config_with_overrides, save_config};
pub use model::{Config, ConfigOverlay, LoggingConfig, LoggingOverlay};
pub use paths::{default_config_path, default_data_path};
