//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands::{self, AddOptions};
use crate::logging;
use crate::ui;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::Path;
use upnext_core::config::load_config_with_overrides;
use upnext_core::{Config, JsonTaskStore, SessionOptions, TaskStore, UpnextResult};

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> UpnextResult<()> {
    // `config init` must work even when the existing file is invalid
    if let Some(Commands::Config {
        action: ConfigAction::Init { force },
    }) = &cli.command
    {
        let path = commands::config::resolve_config_path(cli.config_file.as_deref())?;
        return commands::config::init(&path, *force);
    }

    let config = load_config_with_overrides(cli.config_file.as_deref(), overrides(&cli))?;
    logging::init(&config.logging);

    match cli.command {
        Some(Commands::Add {
            task,
            global,
            priority,
            desc,
        }) => commands::add::run(
            &config,
            AddOptions {
                text: task,
                global,
                priority,
                description: desc,
                cwd: current_context(),
            },
        ),
        Some(Commands::Config { action }) => {
            route_config(action, &config, cli.config_file.as_deref())
        }
        None => route_main(&config, cli.plain, cli.json).await,
    }
}

/// Command line values that take precedence over file and environment
fn overrides(cli: &Cli) -> HashMap<String, String> {
    let mut args = HashMap::new();
    if let Some(path) = &cli.data_file {
        args.insert("data_file".to_string(), path.display().to_string());
    }
    if cli.all {
        args.insert("show_all".to_string(), "true".to_string());
    }
    if cli.verbose {
        args.insert("log_level".to_string(), "debug".to_string());
    }
    args
}

fn route_config(action: ConfigAction, config: &Config, config_file: Option<&Path>) -> UpnextResult<()> {
    let path = commands::config::resolve_config_path(config_file)?;
    match action {
        ConfigAction::Show => commands::config::show(config, &path),
        ConfigAction::Path => commands::config::path(config, &path),
        ConfigAction::Init { force } => commands::config::init(&path, force),
    }
}

/// The bare `upnext` invocation: static output or the interactive list.
///
/// Static output lists every active task; only the interactive list is
/// scoped to the current directory.
async fn route_main(config: &Config, plain: bool, json: bool) -> UpnextResult<()> {
    let store = JsonTaskStore::new(config.data_path()?);

    let is_tty = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    tracing::debug!(is_tty, plain, json, "Selecting output mode");

    if json || plain || !is_tty {
        let data = store.load()?;
        let items: Vec<_> = data.items.iter().collect();

        let output = if json {
            commands::list::render_json(&items, &data.stats)?
        } else {
            commands::list::render_plain(&items, &data.stats)
        };
        println!("{}", output);
        return Ok(());
    }

    let options = SessionOptions::from_config(config, current_context());
    ui::run(Box::new(store), options).await
}

/// Current directory as a task context; empty when unavailable
fn current_context() -> String {
    match std::env::current_dir() {
        Ok(dir) => dir.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!("Cannot determine current directory: {}", e);
            String::new()
        }
    }
}
