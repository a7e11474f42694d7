//! upnext - what's next?
//!
//! A context-aware terminal todo list. Tasks remember the directory they
//! were added in; the interactive list only shows tasks that belong to the
//! current directory tree, plus global ones.
//!
//! ```bash
//! cargo install --path crates/upnext-cli
//! ```
//!
//! See `upnext --help` for the full command list.

mod args;
mod commands;
mod console;
mod logging;
mod router;
mod ui;

use args::Cli;
use clap::Parser;
use console::CliConsole;
use upnext_core::UserFriendlyError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = router::route(cli).await {
        tracing::error!("{}", e);
        CliConsole::new(verbose).report(&UserFriendlyError::from(&e));
        std::process::exit(1);
    }
}
