//! Configuration loading and management

use super::model::{Config, ConfigOverlay};
use super::paths::default_config_path;
use crate::error::{UpnextError, UpnextResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix shared by every environment variable the loader reads
pub const ENV_PREFIX: &str = "UPNEXT_";

pub const ENV_DATA_FILE: &str = "UPNEXT_DATA_FILE";
pub const ENV_SHOW_ALL: &str = "UPNEXT_SHOW_ALL";
pub const ENV_CELEBRATION_SECS: &str = "UPNEXT_CELEBRATION_SECS";
pub const ENV_DEFAULT_PRIORITY: &str = "UPNEXT_DEFAULT_PRIORITY";
pub const ENV_LOG_LEVEL: &str = "UPNEXT_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "UPNEXT_LOG_FILE";

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a JSON file
    File(PathBuf),
    /// Configuration from `UPNEXT_*` environment variables
    Environment(HashMap<String, String>),
    /// Configuration from command line arguments
    CommandLine(HashMap<String, String>),
    /// Default configuration
    Default,
}

/// Configuration loader with support for multiple sources.
///
/// Sources are applied in the order they were added; later sources win.
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add the process environment as a source
    pub fn with_env(self) -> Self {
        let vars = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        self.with_env_vars(vars)
    }

    /// Add an explicit set of environment variables as a source
    pub fn with_env_vars(self, vars: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::Environment(vars))
    }

    /// Add command line arguments source
    pub fn with_args(self, args: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::CommandLine(args))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> UpnextResult<Config> {
        let mut config = Config::default();

        for source in &self.sources {
            match source {
                ConfigSource::Default => {
                    tracing::debug!("Loading default config");
                    config = Config::default();
                }
                other => {
                    let overlay = load_from_source(other)?;
                    config.merge(overlay);
                }
            }
        }

        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_from_source(source: &ConfigSource) -> UpnextResult<ConfigOverlay> {
    match source {
        ConfigSource::File(path) => {
            tracing::debug!("Loading config from file: {}", path.display());
            load_from_file(path)
        }
        ConfigSource::Environment(vars) => {
            tracing::debug!("Loading config from environment");
            load_from_env(vars)
        }
        ConfigSource::CommandLine(args) => {
            tracing::debug!("Loading config from command line");
            load_from_args(args)
        }
        ConfigSource::Default => Ok(ConfigOverlay::default()),
    }
}

/// Missing files contribute nothing
fn load_from_file(path: &Path) -> UpnextResult<ConfigOverlay> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, skipping", path.display());
        return Ok(ConfigOverlay::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        UpnextError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    serde_json::from_str(&content).map_err(|e| {
        UpnextError::config_with_context(
            format!("Failed to parse JSON config: {}", e),
            format!("Deserializing configuration from '{}'", path.display()),
        )
    })
}

fn load_from_env(vars: &HashMap<String, String>) -> UpnextResult<ConfigOverlay> {
    let mut overlay = ConfigOverlay::default();

    if let Some(path) = non_empty(vars, ENV_DATA_FILE) {
        overlay.data_file = Some(PathBuf::from(path));
    }

    if let Some(value) = non_empty(vars, ENV_SHOW_ALL) {
        overlay.show_all = Some(parse_bool(ENV_SHOW_ALL, value)?);
    }

    if let Some(value) = non_empty(vars, ENV_CELEBRATION_SECS) {
        overlay.celebration_delay_secs = Some(value.trim().parse().map_err(|_| {
            UpnextError::config_with_context(
                format!("Invalid {} value", ENV_CELEBRATION_SECS),
                format!("Parsing celebration delay '{}'", value),
            )
        })?);
    }

    if let Some(value) = non_empty(vars, ENV_DEFAULT_PRIORITY) {
        overlay.default_priority = Some(value.to_string());
    }

    if let Some(level) = non_empty(vars, ENV_LOG_LEVEL) {
        overlay.logging_mut().level = Some(level.to_string());
    }

    if let Some(path) = non_empty(vars, ENV_LOG_FILE) {
        overlay.logging_mut().log_file = Some(PathBuf::from(path));
    }

    Ok(overlay)
}

/// Recognised keys: `data_file`, `show_all`, `log_level`
fn load_from_args(args: &HashMap<String, String>) -> UpnextResult<ConfigOverlay> {
    let mut overlay = ConfigOverlay::default();

    if let Some(path) = args.get("data_file") {
        overlay.data_file = Some(PathBuf::from(path));
    }

    if let Some(value) = args.get("show_all") {
        overlay.show_all = Some(parse_bool("show_all", value)?);
    }

    if let Some(level) = args.get("log_level") {
        overlay.logging_mut().level = Some(level.clone());
    }

    Ok(overlay)
}

fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(String::as_str).filter(|v| !v.trim().is_empty())
}

fn parse_bool(key: &str, value: &str) -> UpnextResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(UpnextError::config_with_context(
            format!("Invalid boolean for {}: '{}'", key, value),
            "Expected one of true/false, yes/no, on/off, 1/0",
        )),
    }
}

/// Load configuration from defaults, the config file, the environment,
/// and command line overrides, in that order.
///
/// `config_file` replaces the default `~/.config/upnext/config.json`.
pub fn load_config_with_overrides(
    config_file: Option<&Path>,
    overrides: HashMap<String, String>,
) -> UpnextResult<Config> {
    let mut loader = ConfigLoader::new().with_defaults();

    match config_file {
        Some(path) => loader = loader.with_file(path),
        None => {
            if let Ok(path) = default_config_path() {
                loader = loader.with_file(path);
            }
        }
    }

    loader.with_env().with_args(overrides).load()
}

/// Write `config` as pretty JSON, creating parent directories
pub fn save_config(config: &Config, path: &Path) -> UpnextResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                UpnextError::io_with_path(
                    format!("Failed to create config directory: {}", e),
                    parent.display().to_string(),
                )
            })?;
        }
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json + "\n").map_err(|e| {
        UpnextError::io_with_path(
            format!("Failed to write config file: {}", e),
            path.display().to_string(),
        )
    })?;

    tracing::info!("Wrote configuration to {}", path.display());
    Ok(())
}
