//! Input handling module
//!
//! The demo's prompt line: a single-line editor with a char-indexed cursor.
//! It only edits text; whether a submission is accepted is decided by the
//! demo state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Outcome of feeding a key to the prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// User pressed Enter with this text
    Confirm(String),
    /// User pressed Esc
    Cancel,
    /// Key was consumed (or ignored); keep editing
    Continue,
}

/// Single-line prompt editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInput {
    value: String,
    /// Cursor position in chars, `0..=len`
    cursor: usize,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A prompt line pre-filled with `text`, cursor at the end
    pub fn with_value(text: &str) -> Self {
        Self {
            value: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the line empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Handle keyboard input for the prompt line
    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        match key_event.code {
            KeyCode::Enter => return InputResult::Confirm(self.value.clone()),
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
            }
            _ => {}
        }
        InputResult::Continue
    }
}
