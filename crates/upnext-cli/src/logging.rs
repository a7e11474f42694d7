//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level. Logs go to stderr unless a
//! log file is configured. Stderr output is dropped while the full-screen
//! view holds a [`StderrPause`].

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;
use upnext_core::config::LoggingConfig;

pub fn init(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_ascii_lowercase()));

    let log_file = logging.log_file.as_ref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("upnext: cannot open log file {}: {}", path.display(), e))
            .ok()
    });

    let result = match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(stderr_writer)
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("upnext: logging already initialised: {}", e);
    }
}

static STDERR_PAUSED: AtomicBool = AtomicBool::new(false);

/// Drops stderr log lines until it goes out of scope
pub struct StderrPause {
    _private: (),
}

pub fn pause_stderr() -> StderrPause {
    STDERR_PAUSED.store(true, Ordering::SeqCst);
    StderrPause { _private: () }
}

impl Drop for StderrPause {
    fn drop(&mut self) {
        STDERR_PAUSED.store(false, Ordering::SeqCst);
    }
}

fn stderr_writer() -> Box<dyn Write> {
    if STDERR_PAUSED.load(Ordering::SeqCst) {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}
