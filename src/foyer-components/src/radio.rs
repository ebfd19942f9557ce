//! Radio option group for single selection.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use foyer_core::style::{FoyerStyle, INK, PAPER};

use crate::text::padded_spans;

/// A selectable option.
#[derive(Debug, Clone)]
pub struct RadioItem {
    /// Unique ID
    pub id: String,
    /// Display label
    pub label: String,
}

impl RadioItem {
    /// Create a new radio item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A group of radio options with at most one selection.
///
/// Selection starts empty and is process-local; nothing is persisted.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    /// Items
    pub items: Vec<RadioItem>,
    /// Currently selected index, if any
    pub selected: Option<usize>,
    /// Currently focused index
    pub focused: usize,
}

impl RadioGroup {
    /// Create a new radio group with nothing selected.
    pub fn new(items: Vec<RadioItem>) -> Self {
        Self {
            items,
            selected: None,
            focused: 0,
        }
    }

    /// Select the focused item.
    pub fn select(&mut self) {
        if self.focused < self.items.len() {
            self.selected = Some(self.focused);
        }
    }

    /// Move focus up.
    pub fn focus_prev(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        }
    }

    /// Move focus down.
    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.items.len() {
            self.focused += 1;
        }
    }

    /// Whether focus is on the first item.
    pub fn at_top(&self) -> bool {
        self.focused == 0
    }

    /// Whether focus is on the last item.
    pub fn at_bottom(&self) -> bool {
        self.focused + 1 >= self.items.len()
    }

    /// Get the selected ID.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(|i| i.id.as_str())
    }

    /// Render one line per item.
    ///
    /// When the group has focus, the focused row carries a `>` marker and
    /// reversed emphasis.
    pub fn lines(&self, width: u16, focused: bool) -> Vec<Line<'static>> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_focused = focused && i == self.focused;
                let is_selected = self.selected == Some(i);
                let radio = if is_selected { "(*)" } else { "( )" };
                let prefix = if is_focused { "> " } else { "  " };

                let style = if is_focused {
                    Style::default().fg(PAPER).bg(INK)
                } else if is_selected {
                    FoyerStyle::text()
                } else {
                    FoyerStyle::soft()
                };

                padded_spans(
                    vec![Span::styled(
                        format!("{}{} {}", prefix, radio, item.label),
                        style,
                    )],
                    width,
                    if is_focused { style } else { FoyerStyle::text() },
                )
            })
            .collect()
    }
}
