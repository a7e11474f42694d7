//! Configuration data structures

use super::paths::default_data_path;
use crate::error::{UpnextError, UpnextResult};
use crate::model::Priority;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default celebration display time
pub const DEFAULT_CELEBRATION_DELAY_SECS: u64 = 3;

/// Upper bound for the celebration display time
pub const MAX_CELEBRATION_DELAY_SECS: u64 = 3600;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Data file override; the platform default is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Start the interactive session with every task visible
    #[serde(default)]
    pub show_all: bool,
    /// Seconds the milestone celebration stays on screen
    #[serde(default = "default_celebration_delay")]
    pub celebration_delay_secs: u64,
    /// Priority preselected in the add form (`low`, `medium`, `high`)
    #[serde(default = "default_priority_name")]
    pub default_priority: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            show_all: false,
            celebration_delay_secs: DEFAULT_CELEBRATION_DELAY_SECS,
            default_priority: default_priority_name(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Partial configuration produced by a single source.
///
/// Only the fields a source actually sets are `Some`, so later sources
/// override earlier ones key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverlay {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub show_all: Option<bool>,
    #[serde(default)]
    pub celebration_delay_secs: Option<u64>,
    #[serde(default)]
    pub default_priority: Option<String>,
    #[serde(default)]
    pub logging: Option<LoggingOverlay>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingOverlay {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl ConfigOverlay {
    pub(crate) fn logging_mut(&mut self) -> &mut LoggingOverlay {
        self.logging.get_or_insert_with(LoggingOverlay::default)
    }
}

impl Config {
    /// Apply the values set in `overlay`
    pub fn merge(&mut self, overlay: ConfigOverlay) {
        if let Some(data_file) = overlay.data_file {
            self.data_file = Some(data_file);
        }
        if let Some(show_all) = overlay.show_all {
            self.show_all = show_all;
        }
        if let Some(delay) = overlay.celebration_delay_secs {
            self.celebration_delay_secs = delay;
        }
        if let Some(priority) = overlay.default_priority {
            self.default_priority = priority;
        }
        if let Some(logging) = overlay.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(log_file) = logging.log_file {
                self.logging.log_file = Some(log_file);
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> UpnextResult<()> {
        if !(1..=MAX_CELEBRATION_DELAY_SECS).contains(&self.celebration_delay_secs) {
            return Err(UpnextError::config_with_context(
                format!(
                    "celebration_delay_secs must be between 1 and {}, got {}",
                    MAX_CELEBRATION_DELAY_SECS, self.celebration_delay_secs
                ),
                "Validating celebration settings",
            ));
        }

        self.default_priority
            .parse::<Priority>()
            .map_err(|e| UpnextError::config_with_context(e.to_string(), "Validating default_priority"))?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(UpnextError::config_with_context(
                format!(
                    "invalid log level '{}' (expected one of {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
                "Validating logging settings",
            ));
        }

        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err(UpnextError::config("data_file must not be empty"));
            }
        }

        Ok(())
    }

    /// Priority preselected when adding a task interactively
    pub fn default_priority(&self) -> Priority {
        self.default_priority.parse().unwrap_or_default()
    }

    pub fn celebration_delay(&self) -> Duration {
        Duration::from_secs(self.celebration_delay_secs)
    }

    /// Resolved data file location
    pub fn data_path(&self) -> UpnextResult<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => default_data_path(),
        }
    }
}

fn default_celebration_delay() -> u64 {
    DEFAULT_CELEBRATION_DELAY_SECS
}

fn default_priority_name() -> String {
    "medium".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.celebration_delay(), Duration::from_secs(3));
        assert_eq!(config.default_priority(), Priority::Medium);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_merge_only_overrides_set_fields() {
        let mut config = Config::default();
        config.merge(ConfigOverlay {
            show_all: Some(true),
            logging: Some(LoggingOverlay {
                level: Some("debug".to_string()),
                log_file: None,
            }),
            ..Default::default()
        });
        assert!(config.show_all);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.celebration_delay_secs, 3);
        assert_eq!(config.default_priority, "medium");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.celebration_delay_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.default_priority = "urgent".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_data_file_wins() {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/tasks.json")),
            ..Default::default()
        };
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/tasks.json"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"show_all": true}"#).unwrap();
        assert!(config.show_all);
        assert_eq!(config.celebration_delay_secs, 3);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
