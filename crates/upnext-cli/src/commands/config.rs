//! Configuration management commands

use crate::console::CliConsole;
use colored::*;
use std::path::{Path, PathBuf};
use upnext_core::config::{default_config_path, save_config};
use upnext_core::{Config, UpnextError, UpnextResult};

/// Config file given on the command line, else the default location
pub fn resolve_config_path(config_file: Option<&Path>) -> UpnextResult<PathBuf> {
    match config_file {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Show the effective configuration
pub fn show(config: &Config, config_file: &Path) -> UpnextResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration");

    if config_file.exists() {
        console.success(&format!(
            "Loaded configuration from: {}",
            config_file.display()
        ));
    } else {
        console.warn(&format!(
            "Configuration file not found: {}",
            config_file.display()
        ));
        console.info("Using defaults and environment");
    }

    print_config(&console, config)
}

/// Print the config and data file locations
pub fn path(config: &Config, config_file: &Path) -> UpnextResult<()> {
    println!("config: {}", config_file.display());
    println!("data:   {}", config.data_path()?.display());
    Ok(())
}

/// Write a configuration file with default values
pub fn init(config_file: &Path, force: bool) -> UpnextResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Initialization");

    if config_file.exists() && !force {
        console.error(&format!(
            "Configuration file already exists: {}",
            config_file.display()
        ));
        console.info("Use --force to overwrite");
        return Err(UpnextError::config_with_context(
            "Configuration file already exists",
            config_file.display().to_string(),
        ));
    }

    save_config(&Config::default(), config_file)?;

    console.success(&format!(
        "Created configuration file: {}",
        config_file.display()
    ));
    Ok(())
}

fn print_config(console: &CliConsole, config: &Config) -> UpnextResult<()> {
    console.info(&format!(
        "Data File: {}",
        config.data_path()?.display().to_string().cyan()
    ));
    console.info(&format!(
        "Show All: {}",
        if config.show_all {
            "yes".green()
        } else {
            "no".normal()
        }
    ));
    console.info(&format!(
        "Celebration: {}",
        format!("{}s", config.celebration_delay_secs).yellow()
    ));
    console.info(&format!(
        "Default Priority: {}",
        config.default_priority().label().yellow()
    ));

    console.print_header("Logging");
    console.info(&format!("Level: {}", config.logging.level));
    match &config.logging.log_file {
        Some(file) => console.info(&format!("Log File: {}", file.display())),
        None => console.info("Log File: stderr"),
    }
    Ok(())
}
