//! Key events and the default key map

use std::fmt;

/// A terminal-independent key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character, already shifted (`'G'`, `'?'`)
    Char(char),
    /// Control chord, lower-case letter (`Ctrl('u')`)
    Ctrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("space"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(c) => write!(f, "ctrl+{}", c),
            Key::Enter => f.write_str("enter"),
            Key::Esc => f.write_str("esc"),
            Key::Tab => f.write_str("tab"),
            Key::BackTab => f.write_str("shift+tab"),
            Key::Backspace => f.write_str("backspace"),
            Key::Delete => f.write_str("delete"),
            Key::Up => f.write_str("↑"),
            Key::Down => f.write_str("↓"),
            Key::Left => f.write_str("←"),
            Key::Right => f.write_str("→"),
            Key::Home => f.write_str("home"),
            Key::End => f.write_str("end"),
            Key::PageUp => f.write_str("pgup"),
            Key::PageDown => f.write_str("pgdn"),
        }
    }
}

/// Keys bound to one action plus its help text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: Vec<Key>,
    pub help: &'static str,
}

impl KeyBinding {
    pub fn new(keys: impl Into<Vec<Key>>, help: &'static str) -> Self {
        Self {
            keys: keys.into(),
            help,
        }
    }

    pub fn matches(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Keys joined for the help screen, e.g. `↑/k`
    pub fn keys_label(&self) -> String {
        self.keys
            .iter()
            .map(Key::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Actions available in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwitchTab,
    ActiveTab,
    CompletedTab,
    ToggleAll,
    Done,
    Uncomplete,
    Add,
    Drop,
    Bump,
    Help,
    Up,
    Down,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,
}

/// Key bindings for every action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub half_page_up: KeyBinding,
    pub half_page_down: KeyBinding,
    pub top: KeyBinding,
    pub bottom: KeyBinding,
    pub done: KeyBinding,
    pub uncomplete: KeyBinding,
    pub add: KeyBinding,
    pub drop: KeyBinding,
    pub bump: KeyBinding,
    pub switch_tab: KeyBinding,
    pub active_tab: KeyBinding,
    pub completed_tab: KeyBinding,
    pub toggle_all: KeyBinding,
    pub help: KeyBinding,
    pub quit: KeyBinding,
    pub cancel: KeyBinding,
    pub confirm: KeyBinding,
    pub left: KeyBinding,
    pub right: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: KeyBinding::new([Key::Up, Key::Char('k')], "move up"),
            down: KeyBinding::new([Key::Down, Key::Char('j')], "move down"),
            page_up: KeyBinding::new([Key::PageUp, Key::Ctrl('u')], "page up"),
            page_down: KeyBinding::new([Key::PageDown, Key::Ctrl('d')], "page down"),
            half_page_up: KeyBinding::new([Key::Ctrl('b')], "half page up"),
            half_page_down: KeyBinding::new([Key::Ctrl('f')], "half page down"),
            top: KeyBinding::new([Key::Home, Key::Char('g')], "go to top"),
            bottom: KeyBinding::new([Key::End, Key::Char('G')], "go to bottom"),
            done: KeyBinding::new([Key::Enter, Key::Char('d')], "mark done"),
            uncomplete: KeyBinding::new([Key::Char('u')], "move back to active"),
            add: KeyBinding::new([Key::Char('a')], "add task"),
            drop: KeyBinding::new([Key::Char('x')], "drop task"),
            bump: KeyBinding::new([Key::Char('b')], "bump to top"),
            switch_tab: KeyBinding::new([Key::Tab, Key::BackTab], "switch tab"),
            active_tab: KeyBinding::new([Key::Char('1')], "active tasks"),
            completed_tab: KeyBinding::new([Key::Char('2')], "completed tasks"),
            toggle_all: KeyBinding::new([Key::Char('A')], "toggle all/context"),
            help: KeyBinding::new([Key::Char('?')], "toggle help"),
            quit: KeyBinding::new([Key::Char('q'), Key::Esc], "quit"),
            cancel: KeyBinding::new([Key::Esc], "cancel"),
            confirm: KeyBinding::new([Key::Enter], "confirm"),
            left: KeyBinding::new([Key::Left, Key::Char('h')], "lower priority"),
            right: KeyBinding::new([Key::Right, Key::Char('l')], "raise priority"),
        }
    }
}

impl KeyMap {
    /// Resolve a key pressed in the list view.
    ///
    /// Earlier entries win when a key is bound twice.
    pub fn action_for(&self, key: Key) -> Option<Action> {
        let table: [(&KeyBinding, Action); 19] = [
            (&self.quit, Action::Quit),
            (&self.switch_tab, Action::SwitchTab),
            (&self.active_tab, Action::ActiveTab),
            (&self.completed_tab, Action::CompletedTab),
            (&self.toggle_all, Action::ToggleAll),
            (&self.done, Action::Done),
            (&self.uncomplete, Action::Uncomplete),
            (&self.add, Action::Add),
            (&self.drop, Action::Drop),
            (&self.bump, Action::Bump),
            (&self.help, Action::Help),
            (&self.up, Action::Up),
            (&self.down, Action::Down),
            (&self.page_up, Action::PageUp),
            (&self.page_down, Action::PageDown),
            (&self.half_page_up, Action::HalfPageUp),
            (&self.half_page_down, Action::HalfPageDown),
            (&self.top, Action::Top),
            (&self.bottom, Action::Bottom),
        ];

        table
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }

    /// Bindings shown in the one-line help bar
    pub fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.done, &self.add, &self.drop, &self.bump, &self.help, &self.quit]
    }

    /// Rows of the full help screen: key labels and what they do
    pub fn help_rows(&self) -> Vec<(String, &'static str)> {
        vec![
            (join_labels(&[&self.up, &self.down]), "Navigate tasks"),
            (join_labels(&[&self.page_up, &self.page_down]), "Page up/down"),
            (join_labels(&[&self.half_page_up, &self.half_page_down]), "Half page up/down"),
            (join_labels(&[&self.top, &self.bottom]), "Go to top/bottom"),
            (
                join_labels(&[&self.active_tab, &self.completed_tab, &self.switch_tab]),
                "Switch to Active/Completed tab",
            ),
            (self.done.keys_label(), "Complete task (Active tab)"),
            (self.uncomplete.keys_label(), "Uncomplete task (Completed tab)"),
            (self.add.keys_label(), "Add new task"),
            (self.drop.keys_label(), "Drop (delete) task"),
            (self.bump.keys_label(), "Bump task to top"),
            (self.toggle_all.keys_label(), "Toggle show all tasks"),
            (self.help.keys_label(), "Toggle help"),
            (self.quit.keys_label(), "Quit"),
        ]
    }
}

fn join_labels(bindings: &[&KeyBinding]) -> String {
    bindings
        .iter()
        .map(|b| b.keys_label())
        .collect::<Vec<_>>()
        .join(", ")
}
