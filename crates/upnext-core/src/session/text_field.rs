//! Single-line text editor used by the add form

use super::keys::Key;

/// Editable single-line text with a character limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    chars: Vec<char>,
    /// Cursor as a character index, `0..=len`
    cursor: usize,
    char_limit: usize,
    placeholder: &'static str,
}

impl TextField {
    pub fn new(char_limit: usize, placeholder: &'static str) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            char_limit,
            placeholder,
        }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (String, String) {
        (
            self.chars[..self.cursor].iter().collect(),
            self.chars[self.cursor..].iter().collect(),
        )
    }

    /// Insert at the cursor; ignored once the limit is reached
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.chars.len() >= self.char_limit {
            return false;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    pub fn set_value(&mut self, value: &str) {
        self.chars = value.chars().take(self.char_limit).collect();
        self.cursor = self.chars.len();
    }

    /// Apply an editing key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => self.insert(c),
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
                true
            }
            Key::Delete | Key::Ctrl('d') => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
                true
            }
            Key::Left | Key::Ctrl('b') => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            Key::Right | Key::Ctrl('f') => {
                self.cursor = (self.cursor + 1).min(self.chars.len());
                true
            }
            Key::Home | Key::Ctrl('a') => {
                self.cursor = 0;
                true
            }
            Key::End | Key::Ctrl('e') => {
                self.cursor = self.chars.len();
                true
            }
            Key::Ctrl('u') => {
                self.chars.drain(..self.cursor);
                self.cursor = 0;
                true
            }
            Key::Ctrl('k') => {
                self.chars.truncate(self.cursor);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, limit: usize) -> TextField {
        let mut field = TextField::new(limit, "");
        for c in text.chars() {
            field.handle_key(Key::Char(c));
        }
        field
    }

    #[test]
    fn test_typing_and_editing() {
        let mut field = typed("helo", 100);
        field.handle_key(Key::Left);
        field.handle_key(Key::Char('l'));
        assert_eq!(field.value(), "hello");
        assert_eq!(field.cursor(), 4);

        field.handle_key(Key::End);
        field.handle_key(Key::Backspace);
        assert_eq!(field.value(), "hell");

        field.handle_key(Key::Home);
        field.handle_key(Key::Delete);
        assert_eq!(field.value(), "ell");
        assert_eq!(field.split_at_cursor(), (String::new(), "ell".to_string()));
    }

    #[test]
    fn test_char_limit() {
        let field = typed(&"x".repeat(150), 100);
        assert_eq!(field.len(), 100);

        let mut field = TextField::new(5, "");
        field.set_value("abcdefgh");
        assert_eq!(field.value(), "abcde");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut field = typed("héllo ✓", 100);
        assert_eq!(field.len(), 7);
        field.handle_key(Key::Backspace);
        field.handle_key(Key::Backspace);
        assert_eq!(field.value(), "héllo");
    }

    #[test]
    fn test_boundaries_are_safe() {
        let mut field = TextField::new(10, "");
        field.handle_key(Key::Backspace);
        field.handle_key(Key::Delete);
        field.handle_key(Key::Left);
        field.handle_key(Key::Right);
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
        assert!(!field.handle_key(Key::Up));
    }
}
