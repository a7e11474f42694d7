//! Session modes and tabs

use super::text_field::TextField;
use crate::model::Priority;

pub const TITLE_CHAR_LIMIT: usize = 100;
pub const DESCRIPTION_CHAR_LIMIT: usize = 200;

/// Which list the session shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Active,
    Completed,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Tab::Active => Tab::Completed,
            Tab::Completed => Tab::Active,
        }
    }
}

/// Focusable fields of the add form, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
}

impl FormField {
    pub fn index(self) -> usize {
        match self {
            FormField::Title => 0,
            FormField::Description => 1,
            FormField::Priority => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
        }
    }
}

/// Draft of a task being added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub title: TextField,
    pub description: TextField,
    pub priority: Priority,
    pub focus: FormField,
}

impl AddForm {
    pub fn new(priority: Priority) -> Self {
        Self {
            title: TextField::new(TITLE_CHAR_LIMIT, "What needs to be done?"),
            description: TextField::new(DESCRIPTION_CHAR_LIMIT, "Optional description..."),
            priority,
            focus: FormField::Title,
        }
    }

    /// The text field with focus, if any
    pub fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Priority => None,
        }
    }
}

/// Modal state of the interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Input(AddForm),
    Help,
    Celebration { message: String },
    /// Reserved; no transition enters it yet
    Confirm,
}

impl Mode {
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    pub fn form(&self) -> Option<&AddForm> {
        match self {
            Mode::Input(form) => Some(form),
            _ => None,
        }
    }
}
