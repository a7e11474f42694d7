//! Interactive session state machine
//!
//! A [`Session`] owns the live [`Dataset`] for the whole interactive run.
//! The driver feeds it one [`SessionEvent`] at a time and acts on the
//! returned [`Effect`]; rendering only reads the session.
//!
//! Selection always goes cursor → displayed record → identifier, and the
//! mutation is applied to the full dataset by identifier.

pub mod celebration;
pub mod keys;
pub mod mode;
pub mod text_field;

pub use keys::{Action, Key, KeyBinding, KeyMap};
pub use mode::{AddForm, FormField, Mode, Tab};
pub use text_field::TextField;

use crate::config::Config;
use crate::error::UpnextResult;
use crate::model::{ArchivedTodo, Dataset, NewTodo, Priority, Todo};
use crate::store::TaskStore;
use std::time::Duration;
use tracing::{debug, warn};

/// Terminal rows taken by everything except the task table
pub const CHROME_ROWS: u16 = 18;

const DEFAULT_ROWS: u16 = 24;
const MIN_PAGE_SIZE: usize = 3;

/// Discrete input delivered to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Key(Key),
    /// A scheduled celebration timeout fired
    CelebrationElapsed(u64),
    Resize { rows: u16 },
}

/// What the driver must do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Deliver `CelebrationElapsed(token)` after `after`
    ScheduleCelebrationTimeout { after: Duration, token: u64 },
}

/// Startup options for a session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory used for relevance; empty shows everything
    pub cwd: String,
    pub show_all: bool,
    pub celebration_delay: Duration,
    pub default_priority: Priority,
    pub keymap: KeyMap,
    pub rows: u16,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            cwd: String::new(),
            show_all: false,
            celebration_delay: Duration::from_secs(3),
            default_priority: Priority::Medium,
            keymap: KeyMap::default(),
            rows: DEFAULT_ROWS,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &Config, cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            show_all: config.show_all,
            celebration_delay: config.celebration_delay(),
            default_priority: config.default_priority(),
            ..Default::default()
        }
    }
}

/// State of one interactive run
pub struct Session {
    dataset: Dataset,
    store: Box<dyn TaskStore>,
    cwd: String,
    tab: Tab,
    show_all: bool,
    mode: Mode,
    cursor: usize,
    offset: usize,
    page_size: usize,
    /// Indices into `dataset.items` currently displayed
    active_view: Vec<usize>,
    /// Indices into `dataset.archive`, newest completion first
    archive_view: Vec<usize>,
    last_error: Option<String>,
    keymap: KeyMap,
    celebration_delay: Duration,
    celebration_token: u64,
    default_priority: Priority,
}

impl Session {
    /// Load the dataset from `store` and start in the list view.
    ///
    /// Load errors abort the session.
    pub fn new(store: Box<dyn TaskStore>, options: SessionOptions) -> UpnextResult<Self> {
        let dataset = store.load()?;
        let mut session = Self {
            dataset,
            store,
            cwd: options.cwd,
            tab: Tab::Active,
            show_all: options.show_all,
            mode: Mode::Normal,
            cursor: 0,
            offset: 0,
            page_size: page_size_for(options.rows),
            active_view: Vec::new(),
            archive_view: Vec::new(),
            last_error: None,
            keymap: options.keymap,
            celebration_delay: options.celebration_delay,
            celebration_token: 0,
            default_priority: options.default_priority,
        };
        session.recompute_view();
        debug!(
            items = session.dataset.items.len(),
            visible = session.active_view.len(),
            cwd = %session.cwd,
            "Session started"
        );
        Ok(session)
    }

    /// Apply one event
    pub fn handle(&mut self, event: SessionEvent) -> Effect {
        match event {
            SessionEvent::Resize { rows } => {
                self.page_size = page_size_for(rows);
                self.scroll_to_cursor();
                Effect::None
            }
            SessionEvent::CelebrationElapsed(token) => {
                if matches!(self.mode, Mode::Celebration { .. }) && token == self.celebration_token
                {
                    self.mode = Mode::Normal;
                } else {
                    debug!(token, "Ignoring stale celebration timeout");
                }
                Effect::None
            }
            SessionEvent::Key(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: Key) -> Effect {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Input(_) => {
                self.handle_input_key(key);
                Effect::None
            }
            Mode::Help => {
                if self.keymap.help.matches(key)
                    || self.keymap.quit.matches(key)
                    || self.keymap.confirm.matches(key)
                {
                    self.mode = Mode::Normal;
                }
                Effect::None
            }
            Mode::Celebration { .. } => {
                self.mode = Mode::Normal;
                Effect::None
            }
            Mode::Confirm => {
                if self.keymap.cancel.matches(key) || self.keymap.confirm.matches(key) {
                    self.mode = Mode::Normal;
                }
                Effect::None
            }
        }
    }

    fn handle_normal_key(&mut self, key: Key) -> Effect {
        let Some(action) = self.keymap.action_for(key) else {
            return Effect::None;
        };

        match action {
            Action::Quit => return Effect::Quit,
            Action::SwitchTab => self.switch_tab(),
            Action::ActiveTab => self.set_tab(Tab::Active),
            Action::CompletedTab => self.set_tab(Tab::Completed),
            Action::ToggleAll => self.toggle_show_all(),
            Action::Done => return self.complete_selected(),
            Action::Uncomplete => {
                self.uncomplete_selected();
            }
            Action::Add => self.open_add_form(),
            Action::Drop => {
                self.drop_selected();
            }
            Action::Bump => {
                self.bump_selected();
            }
            Action::Help => self.mode = Mode::Help,
            Action::Up => self.move_cursor(-1),
            Action::Down => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-(self.page_size as isize)),
            Action::PageDown => self.move_cursor(self.page_size as isize),
            Action::HalfPageUp => self.move_cursor(-(self.half_page() as isize)),
            Action::HalfPageDown => self.move_cursor(self.half_page() as isize),
            Action::Top => self.set_cursor(0),
            Action::Bottom => self.set_cursor(self.visible_len().saturating_sub(1)),
        }
        Effect::None
    }

    fn handle_input_key(&mut self, key: Key) {
        let keymap = &self.keymap;
        let Mode::Input(form) = &mut self.mode else {
            return;
        };

        if keymap.cancel.matches(key) {
            debug!("Add form cancelled");
            self.mode = Mode::Normal;
            return;
        }

        if keymap.confirm.matches(key) {
            if form.focus == FormField::Priority {
                self.submit_form();
            } else {
                form.focus = form.focus.next();
            }
            return;
        }

        match key {
            Key::Tab => form.focus = form.focus.next(),
            Key::BackTab => form.focus = form.focus.prev(),
            _ if form.focus == FormField::Priority => {
                if keymap.left.matches(key) {
                    form.priority = form.priority.prev();
                } else if keymap.right.matches(key) {
                    form.priority = form.priority.next();
                }
            }
            _ => {
                if let Some(field) = form.focused_text_mut() {
                    field.handle_key(key);
                }
            }
        }
    }

    fn open_add_form(&mut self) {
        if self.tab != Tab::Active {
            return;
        }
        self.mode = Mode::Input(AddForm::new(self.default_priority));
    }

    fn submit_form(&mut self) {
        let Mode::Input(form) = std::mem::take(&mut self.mode) else {
            return;
        };

        let title = form.title.value();
        if title.trim().is_empty() {
            debug!("Add form submitted without a title");
            return;
        }

        let new = NewTodo::new(title)
            .with_description(form.description.value())
            .with_priority(form.priority)
            .with_context(self.cwd.clone());
        self.add_task(new);
    }

    /// Add a task and persist. Returns false for empty text.
    pub fn add_task(&mut self, new: NewTodo) -> bool {
        if self.dataset.add(new).is_none() {
            return false;
        }
        self.recompute_view();
        self.set_cursor(0);
        self.persist();
        true
    }

    /// Complete the selected active task.
    ///
    /// Schedules a celebration when the lifetime count reaches a milestone.
    pub fn complete_selected(&mut self) -> Effect {
        if self.tab != Tab::Active {
            return Effect::None;
        }
        let Some(id) = self.selected_id() else {
            return Effect::None;
        };
        if !self.dataset.complete(&id) {
            return Effect::None;
        }
        self.recompute_view();
        self.persist();

        let total = self.dataset.stats.total_completed;
        match celebration::message_for(total) {
            Some(message) => {
                self.celebration_token += 1;
                self.mode = Mode::Celebration {
                    message: message.to_string(),
                };
                debug!(total, token = self.celebration_token, "Milestone reached");
                Effect::ScheduleCelebrationTimeout {
                    after: self.celebration_delay,
                    token: self.celebration_token,
                }
            }
            None => Effect::None,
        }
    }

    /// Move the selected archived task back to the active list
    pub fn uncomplete_selected(&mut self) -> bool {
        if self.tab != Tab::Completed {
            return false;
        }
        let Some(id) = self.selected_id() else {
            return false;
        };
        if !self.dataset.uncomplete(&id) {
            return false;
        }
        self.recompute_view();
        self.persist();
        true
    }

    /// Delete the selected task from whichever list is shown
    pub fn drop_selected(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        if !self.dataset.drop_task(&id, self.tab == Tab::Completed) {
            return false;
        }
        self.recompute_view();
        self.persist();
        true
    }

    /// Move the selected active task to the top
    pub fn bump_selected(&mut self) -> bool {
        if self.tab != Tab::Active {
            return false;
        }
        let Some(id) = self.selected_id() else {
            return false;
        };
        if !self.dataset.bump(&id) {
            return false;
        }
        self.recompute_view();
        self.set_cursor(0);
        self.persist();
        true
    }

    pub fn switch_tab(&mut self) {
        self.set_tab(self.tab.toggle());
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.cursor = 0;
        self.offset = 0;
        self.recompute_view();
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
        self.recompute_view();
    }

    /// Persist the dataset now
    pub fn save(&mut self) -> UpnextResult<()> {
        let result = self.store.save(&self.dataset);
        match &result {
            Ok(()) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
        result
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!("Failed to save tasks: {}", e);
        }
    }

    fn shows_everything(&self) -> bool {
        self.show_all || self.cwd.is_empty()
    }

    fn recompute_view(&mut self) {
        if self.shows_everything() {
            self.active_view = (0..self.dataset.items.len()).collect();
            self.archive_view = (0..self.dataset.archive.len()).collect();
        } else {
            self.active_view = self.dataset.relevant_items(&self.cwd);
            self.archive_view = self.dataset.relevant_archive(&self.cwd);
        }
        self.archive_view.reverse();

        self.set_cursor(self.cursor);
    }

    fn half_page(&self) -> usize {
        (self.page_size / 2).max(1)
    }

    fn move_cursor(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta as usize)
        };
        self.set_cursor(target);
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.visible_len().saturating_sub(1));
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.page_size {
            self.offset = self.cursor + 1 - self.page_size;
        }
        let max_offset = self.visible_len().saturating_sub(self.page_size);
        self.offset = self.offset.min(max_offset);
    }

    // Read accessors

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First displayed row of the table
    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    /// Table rows that fit on screen
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn celebration_message(&self) -> Option<&str> {
        match &self.mode {
            Mode::Celebration { message } => Some(message),
            _ => None,
        }
    }

    /// Active tasks in display order
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.active_view
            .iter()
            .map(|&index| &self.dataset.items[index])
            .collect()
    }

    /// Archived tasks, newest completion first
    pub fn visible_archive(&self) -> Vec<&ArchivedTodo> {
        self.archive_view
            .iter()
            .map(|&index| &self.dataset.archive[index])
            .collect()
    }

    /// Length of the list on the current tab
    pub fn visible_len(&self) -> usize {
        match self.tab {
            Tab::Active => self.active_view.len(),
            Tab::Completed => self.archive_view.len(),
        }
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        if self.tab != Tab::Active {
            return None;
        }
        self.active_view
            .get(self.cursor)
            .map(|&index| &self.dataset.items[index])
    }

    pub fn selected_archived(&self) -> Option<&ArchivedTodo> {
        if self.tab != Tab::Completed {
            return None;
        }
        self.archive_view
            .get(self.cursor)
            .map(|&index| &self.dataset.archive[index])
    }

    /// Identifier of the record under the cursor on the current tab
    pub fn selected_id(&self) -> Option<String> {
        match self.tab {
            Tab::Active => self.selected_todo().map(|t| t.id.clone()),
            Tab::Completed => self.selected_archived().map(|t| t.id.clone()),
        }
    }
}

fn page_size_for(rows: u16) -> usize {
    (rows.saturating_sub(CHROME_ROWS) as usize).max(MIN_PAGE_SIZE)
}
