//! Single-line text input.
//!
//! Grapheme-aware editing state plus a line renderer. The value is
//! process-local and never persisted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;

use foyer_core::style::{INK, INK_FAINT, PAPER_DIM};

use crate::component::ComponentResult;
use crate::text::padded_spans;

/// State for a single-line text input.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current text value
    pub value: String,
    /// Cursor position (in graphemes)
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: Option<String>,
}

impl InputState {
    /// Create new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let new_cursor = self.cursor - 1;
            let start_byte = self.grapheme_to_byte_offset(new_cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor);
            self.value.replace_range(start_byte..end_byte, "");
            self.cursor = new_cursor;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        let grapheme_count = self.value.graphemes(true).count();
        if self.cursor < grapheme_count {
            let start_byte = self.grapheme_to_byte_offset(self.cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor + 1);
            self.value.replace_range(start_byte..end_byte, "");
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        let grapheme_count = self.value.graphemes(true).count();
        if self.cursor < grapheme_count {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.graphemes(true).count();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply an edit key. Returns `NotHandled` for keys that are not
    /// edit operations so the caller can route them elsewhere.
    pub fn handle_key(&mut self, key: KeyEvent) -> ComponentResult {
        match key.code {
            KeyCode::Backspace => {
                self.backspace();
                ComponentResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                ComponentResult::Handled
            }
            KeyCode::Left => {
                self.move_left();
                ComponentResult::Handled
            }
            KeyCode::Right => {
                self.move_right();
                ComponentResult::Handled
            }
            KeyCode::Home => {
                self.move_home();
                ComponentResult::Handled
            }
            KeyCode::End => {
                self.move_end();
                ComponentResult::Handled
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                ComponentResult::Handled
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                ComponentResult::Handled
            }
            _ => ComponentResult::NotHandled,
        }
    }

    /// Render the input as one full-width line.
    ///
    /// The field sits on a sunken background; when focused, the cursor
    /// cell renders in reverse video.
    pub fn line(&self, width: u16, focused: bool) -> Line<'static> {
        let field = Style::default().fg(INK).bg(PAPER_DIM);
        let cursor_style = Style::default().fg(PAPER_DIM).bg(INK);

        if self.value.is_empty() && !focused {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            return padded_spans(
                vec![Span::styled(
                    placeholder,
                    Style::default().fg(INK_FAINT).bg(PAPER_DIM),
                )],
                width,
                field,
            );
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let before: String = graphemes[..self.cursor.min(graphemes.len())].concat();
        let at_cursor: String = graphemes
            .get(self.cursor)
            .copied()
            .unwrap_or(" ")
            .to_string();
        let after: String = if self.cursor + 1 <= graphemes.len() {
            graphemes[(self.cursor + 1).min(graphemes.len())..].concat()
        } else {
            String::new()
        };

        let mut spans = vec![Span::styled(before, field)];
        if focused {
            spans.push(Span::styled(at_cursor, cursor_style));
        } else {
            spans.push(Span::styled(at_cursor, field));
        }
        spans.push(Span::styled(after, field));

        padded_spans(spans, width, field)
    }

    fn grapheme_to_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.value.len())
    }
}
