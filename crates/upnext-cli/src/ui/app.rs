//! Interactive full-screen driver
//!
//! A blocking reader thread forwards terminal events into a single tokio
//! channel. Celebration timers post into the same channel, so the session
//! only ever sees one event at a time.

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;
use upnext_core::{
    Effect, Key, Session, SessionEvent, SessionOptions, TaskStore, UpnextError, UpnextResult,
};

use super::input::translate_key;
use super::screen::render_screen;
use super::theme::{Theme, current_theme};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

enum AppEvent {
    Terminal(Event),
    CelebrationElapsed(u64),
    InputFailed(String),
}

/// Load the task list and run the interactive view until the user quits
pub async fn run(store: Box<dyn TaskStore>, options: SessionOptions) -> UpnextResult<()> {
    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    let mut session = Session::new(store, SessionOptions { rows, ..options })?;

    event_loop(&mut session, cols, rows)
        .await
        .map_err(|e| UpnextError::io_with_context(format!("{:#}", e), "Terminal"))
}

async fn event_loop(session: &mut Session, mut cols: u16, mut rows: u16) -> Result<()> {
    let _stderr = crate::logging::pause_stderr();
    let _guard = TerminalGuard::enter()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _reader = InputReader::spawn(tx.clone());
    let theme = current_theme();

    draw(session, cols, rows, theme)?;

    while let Some(event) = rx.recv().await {
        let effect = match event {
            AppEvent::Terminal(Event::Key(key_event)) => {
                let Some(key) = translate_key(key_event) else {
                    continue;
                };
                if key == Key::Ctrl('c') {
                    break;
                }
                session.handle(SessionEvent::Key(key))
            }
            AppEvent::Terminal(Event::Resize(new_cols, new_rows)) => {
                cols = new_cols;
                rows = new_rows;
                session.handle(SessionEvent::Resize { rows })
            }
            AppEvent::Terminal(_) => continue,
            AppEvent::CelebrationElapsed(token) => {
                session.handle(SessionEvent::CelebrationElapsed(token))
            }
            AppEvent::InputFailed(message) => {
                anyhow::bail!("Failed to read terminal input: {}", message);
            }
        };

        match effect {
            Effect::Quit => break,
            Effect::ScheduleCelebrationTimeout { after, token } => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(AppEvent::CelebrationElapsed(token));
                });
            }
            Effect::None => {}
        }

        draw(session, cols, rows, theme)?;
    }

    tracing::debug!("Interactive session finished");
    Ok(())
}

fn draw(session: &Session, cols: u16, rows: u16, theme: &Theme) -> Result<()> {
    let element = render_screen(session, cols, rows, Utc::now(), theme);
    let output = rnk::render_to_string(&element, cols);

    let mut stdout = io::stdout().lock();
    for (row, text) in output.lines().take(rows as usize).enumerate() {
        queue!(
            stdout,
            cursor::MoveTo(0, row as u16),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
    }
    queue!(stdout, Clear(ClearType::FromCursorDown))?;
    stdout.flush().context("Failed to flush terminal")?;
    Ok(())
}

/// Raw mode and the alternate screen for as long as it lives
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Background thread forwarding terminal events
struct InputReader {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputReader {
    fn spawn(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = std::thread::spawn(move || {
            while running_clone.load(Ordering::Relaxed) {
                let next = match event::poll(POLL_INTERVAL) {
                    Ok(true) => event::read().map(Some),
                    Ok(false) => Ok(None),
                    Err(e) => Err(e),
                };
                let sent = match next {
                    Ok(Some(ev)) => tx.send(AppEvent::Terminal(ev)),
                    Ok(None) => Ok(()),
                    Err(e) => {
                        let _ = tx.send(AppEvent::InputFailed(e.to_string()));
                        break;
                    }
                };
                if sent.is_err() {
                    break;
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
