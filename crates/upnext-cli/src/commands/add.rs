//! `upnext add`

use crate::console::CliConsole;
use upnext_core::{Config, JsonTaskStore, NewTodo, Priority, TaskStore, UpnextResult};

/// Options of a single add
pub struct AddOptions {
    pub text: String,
    pub global: bool,
    pub priority: Option<String>,
    pub description: Option<String>,
    /// Current directory; empty when it could not be determined
    pub cwd: String,
}

pub fn run(config: &Config, options: AddOptions) -> UpnextResult<()> {
    let console = CliConsole::new(false);

    let priority = match options.priority.as_deref() {
        Some(value) => value.parse::<Priority>()?,
        None => config.default_priority(),
    };

    let context = if options.global {
        String::new()
    } else {
        options.cwd
    };
    let is_global = context.is_empty();

    if options.text.trim().is_empty() {
        console.warn("Task text is empty; nothing was added");
        return Ok(());
    }

    let new = NewTodo::new(options.text)
        .with_description(options.description.unwrap_or_default())
        .with_priority(priority)
        .with_context(context);

    let store = JsonTaskStore::new(config.data_path()?);
    let mut data = store.load()?;
    let Some(added) = data.add(new).cloned() else {
        return Ok(());
    };
    store.save(&data)?;

    tracing::info!(id = %added.id, "Task added");
    let location = if is_global { "globally" } else { "here" };
    println!("Added {}: {}", location, added.text);
    Ok(())
}
