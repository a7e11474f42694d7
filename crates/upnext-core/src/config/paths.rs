//! Config and data file locations
//!
//! - Config: ~/.config/upnext/config.json
//! - Data (Linux and others): $XDG_DATA_HOME/upnext/todos.json, falling back
//!   to ~/.local/share/upnext/todos.json
//! - Data (macOS): ~/.local/share/upnext/todos.json
//! - Data (Windows): %LOCALAPPDATA%\upnext\todos.json

use crate::error::{UpnextError, UpnextResult};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "upnext";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DATA_FILE_NAME: &str = "todos.json";

/// Default config file path
pub fn default_config_path() -> UpnextResult<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        UpnextError::config("Cannot determine the home directory for the config file")
    })?;
    Ok(home.join(".config").join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Default data file path for this platform
pub fn default_data_path() -> UpnextResult<PathBuf> {
    platform_data_dir()
        .map(|dir| dir.join(APP_DIR).join(DATA_FILE_NAME))
        .ok_or_else(|| {
            UpnextError::storage_unavailable(
                "Cannot determine a data directory; set UPNEXT_DATA_FILE or --data-file",
                None,
            )
        })
}

#[cfg(target_os = "windows")]
fn platform_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir()
}

#[cfg(target_os = "macos")]
fn platform_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".local").join("share"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_data_dir() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_DATA_HOME").ok();
    xdg_data_dir(xdg.as_deref(), dirs::home_dir().as_deref())
}

/// `$XDG_DATA_HOME` when set to an absolute path, else `<home>/.local/share`
#[cfg_attr(any(target_os = "windows", target_os = "macos"), allow(dead_code))]
fn xdg_data_dir(xdg_data_home: Option<&str>, home: Option<&Path>) -> Option<PathBuf> {
    match xdg_data_home {
        Some(dir) if Path::new(dir).is_absolute() => Some(PathBuf::from(dir)),
        _ => home.map(|home| home.join(".local").join("share")),
    }
}
