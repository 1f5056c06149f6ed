//! Text input widget
//!
//! A single-line text input with cursor support, shared by the dialog forms.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A simple text input field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position (byte offset; input is ASCII-safe for amounts,
    /// multi-byte text is appended at the end in practice)
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input prefilled with content, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self { content, cursor }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether the input is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Render the input as a line, with a block cursor when focused
    pub fn line(&self, focused: bool) -> Line<'static> {
        if !focused {
            return Line::from(Span::styled(
                self.content.clone(),
                Style::default().fg(Color::White),
            ));
        }

        let cursor = self.cursor.min(self.content.len());
        let (before, after) = self.content.split_at(cursor);

        let mut spans = vec![Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        )];

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest: String = after.chars().skip(1).collect();
        if !rest.is_empty() {
            spans.push(Span::styled(rest, Style::default().fg(Color::White)));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('1');
        input.insert('2');
        input.insert('.');
        input.insert('5');
        assert_eq!(input.value(), "12.5");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::with_content("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.backspace();
        input.backspace();
        input.backspace(); // no-op at start
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut input = TextInput::with_content("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
        input.move_right();
        input.insert('d');
        assert_eq!(input.value(), "abcd");
    }

    #[test]
    fn test_is_blank() {
        assert!(TextInput::new().is_blank());
        assert!(TextInput::with_content("   ").is_blank());
        assert!(!TextInput::with_content("x").is_blank());
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::with_content("something");
        input.clear();
        assert!(input.is_blank());
        input.insert('a');
        assert_eq!(input.value(), "a");
    }
}
