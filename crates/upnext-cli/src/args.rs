//! CLI argument definitions using clap
//!
//! - upnext                      # Interactive list (plain list when not a terminal)
//! - upnext --plain | --json     # Static output
//! - upnext add "task"           # Add a task for the current directory
//! - upnext config show|init|path

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "upnext")]
#[command(about = "upnext - what's next? A context-aware terminal todo list")]
#[command(
    long_about = r#"upnext - what's next? A context-aware terminal todo list

Tasks remember the directory they were added in and only show up there
(and in parent or child directories). Global tasks show up everywhere.

USAGE:
  upnext                         # Interactive list
  upnext --plain                 # Plain text list of every task
  upnext --json                  # JSON list of every task
  upnext add "your task"         # Add a task here
  upnext add -g "your task"      # Add a global task

UTILITY COMMANDS:
  upnext config init             # Create config file
  upnext config show             # Show effective config
  upnext config path             # Show config and data file locations"#
)]
#[command(version)]
pub struct Cli {
    /// Print the list as plain text
    #[arg(long, conflicts_with = "json")]
    pub plain: bool,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,

    /// Interactive list shows all tasks regardless of the current directory
    #[arg(long)]
    pub all: bool,

    /// Path to configuration file (default: ~/.config/upnext/config.json)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Path to the task data file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task (tied to the current directory by default)
    #[command(verbatim_doc_comment)]
    Add {
        /// Task text
        task: String,

        /// Create a global task (visible from anywhere)
        #[arg(short, long)]
        global: bool,

        /// Priority: high, medium, or low (other values are rejected)
        #[arg(short, long)]
        priority: Option<String>,

        /// Task description
        #[arg(short, long = "desc")]
        desc: Option<String>,
    },

    /// Manage the configuration file
    #[command(verbatim_doc_comment)]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,

    /// Create a configuration file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print config and data file locations
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_flags() {
        let cli = Cli::parse_from([
            "upnext", "add", "ship it", "-g", "-p", "high", "-d", "before friday",
        ]);
        match cli.command {
            Some(Commands::Add {
                task,
                global,
                priority,
                desc,
            }) => {
                assert_eq!(task, "ship it");
                assert!(global);
                assert_eq!(priority.as_deref(), Some("high"));
                assert_eq!(desc.as_deref(), Some("before friday"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["upnext", "add", "x", "--data-file", "/tmp/t.json", "-v"]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/t.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_priority_help_mentions_rejection() {
        let command = Cli::command();
        let add = command.find_subcommand("add").unwrap();
        let priority = add
            .get_arguments()
            .find(|arg| arg.get_id() == "priority")
            .unwrap();
        let help = priority.get_help().unwrap().to_string();
        assert!(help.contains("rejected"));
    }

    #[test]
    fn test_plain_and_json_conflict() {
        assert!(Cli::try_parse_from(["upnext", "--plain", "--json"]).is_err());
    }
}
