//! CLI console utilities

use colored::*;
use upnext_core::UserFriendlyError;

/// CLI console for formatted one-shot output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print a failed command's error with suggestions to stderr
    pub fn report(&self, error: &UserFriendlyError) {
        eprintln!(
            "{} {}: {}",
            "✗".red().bold(),
            error.category.display_name().red().bold(),
            error.title.red()
        );
        eprintln!("  {}", error.message);
        if !error.suggestions.is_empty() {
            eprintln!();
            for suggestion in &error.suggestions {
                eprintln!("  {} {}", "→".dimmed(), suggestion);
            }
        }
        if self.verbose && !error.error_code.is_empty() {
            eprintln!("  {}", format!("[{}]", error.error_code).dimmed());
        }
    }
}
