//! Check-in section: the "Creative Corner".
//!
//! A free-text field and a five-option single-select. Both are
//! process-local: nothing is written anywhere, and the state is gone
//! when the app exits.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::Line;

use foyer_components::component::{Component, ComponentResult, FocusState};
use foyer_components::input::InputState;
use foyer_components::radio::{RadioGroup, RadioItem};
use foyer_components::text::{blank_line, wrap_styled};
use foyer_core::style::FoyerStyle;

use super::{panel, panel_blank, panel_inner_width};

/// Which control inside the section has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckinFocus {
    Input,
    Options,
}

/// The interactive check-in panel.
pub struct CheckinSection {
    input: InputState,
    options: RadioGroup,
    focus: CheckinFocus,
    focused: bool,
}

impl CheckinSection {
    pub fn new() -> Self {
        Self {
            input: InputState::new().with_placeholder("type here…"),
            options: RadioGroup::new(vec![
                RadioItem::new("sit", "a place to sit"),
                RadioItem::new("web", "a tiny website"),
                RadioItem::new("late", "something at 2am"),
                RadioItem::new("quiet", "a quieter room"),
                RadioItem::new("unsure", "not sure yet"),
            ]),
            focus: CheckinFocus::Input,
            focused: false,
        }
    }

    /// The free-text answer, for whoever is curious at exit.
    pub fn build_text(&self) -> &str {
        &self.input.value
    }

    /// The selected option id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.options.selected_id()
    }
}

impl Default for CheckinSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CheckinSection {
    type Output = ();

    fn render_lines(&self, width: u16, height: u16, _now: Instant) -> Vec<Line<'static>> {
        let inner = panel_inner_width(width);
        let plain = FoyerStyle::text();
        let soft = FoyerStyle::soft();
        let faint = FoyerStyle::faint();

        let input_focused = self.focused && self.focus == CheckinFocus::Input;
        let options_focused = self.focused && self.focus == CheckinFocus::Options;

        let mut body = vec![panel_blank(inner)];
        body.extend(wrap_styled(&[("quick pause.", plain)], inner, plain));
        body.push(panel_blank(inner));
        body.extend(wrap_styled(
            &[("what are you trying to build right now?", plain)],
            inner,
            plain,
        ));
        body.push(panel_blank(inner));
        body.push(self.input.line(inner, input_focused));
        body.push(panel_blank(inner));
        body.extend(wrap_styled(&[("or pick what's closest:", soft)], inner, plain));
        body.push(panel_blank(inner));
        body.extend(self.options.lines(inner, options_focused));
        body.push(panel_blank(inner));
        body.extend(wrap_styled(&[("or think about this:", soft)], inner, plain));
        body.extend(wrap_styled(
            &[(
                "\u{201c}what small experiment could you try this week?\u{201d}",
                soft,
            )],
            inner,
            plain,
        ));
        body.push(panel_blank(inner));
        body.extend(wrap_styled(
            &[("(saved only in this window for now)", faint)],
            inner,
            plain,
        ));
        body.push(panel_blank(inner));

        let mut lines = vec![blank_line(width, plain); 2];
        lines.extend(panel("Creative Corner", body, width));
        lines.truncate(height as usize);
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        // Tab hops between the field and the options regardless of which
        // one holds focus.
        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                CheckinFocus::Input => CheckinFocus::Options,
                CheckinFocus::Options => CheckinFocus::Input,
            };
            return ComponentResult::Handled;
        }

        match self.focus {
            CheckinFocus::Input => match key.code {
                KeyCode::Enter | KeyCode::Down => {
                    self.focus = CheckinFocus::Options;
                    ComponentResult::Handled
                }
                _ => self.input.handle_key(key),
            },
            CheckinFocus::Options => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.options.at_top() {
                        self.focus = CheckinFocus::Input;
                    } else {
                        self.options.focus_prev();
                    }
                    ComponentResult::Handled
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.options.at_bottom() {
                        // Let the page take over (snap onward).
                        ComponentResult::NotHandled
                    } else {
                        self.options.focus_next();
                        ComponentResult::Handled
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.options.select();
                    ComponentResult::Handled
                }
                _ => ComponentResult::NotHandled,
            },
        }
    }

    fn focus_state(&self) -> FocusState {
        if !self.focused {
            FocusState::Unfocused
        } else if self.focus == CheckinFocus::Input {
            FocusState::Editing
        } else {
            FocusState::Focused
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focus {
            CheckinFocus::Input => vec![("Tab", "Options"), ("Type", "Answer")],
            CheckinFocus::Options => vec![("↑↓", "Navigate"), ("Enter", "Select")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_goes_to_input() {
        let mut section = CheckinSection::new();
        section.set_focus(true);

        for c in "a bed".chars() {
            section.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(section.build_text(), "a bed");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut section = CheckinSection::new();
        section.set_focus(true);
        assert!(section.focus_state().is_editing());

        section.handle_key(key(KeyCode::Tab));
        assert_eq!(section.focus_state(), FocusState::Focused);

        section.handle_key(key(KeyCode::Tab));
        assert!(section.focus_state().is_editing());
    }

    #[test]
    fn test_select_option() {
        let mut section = CheckinSection::new();
        section.set_focus(true);

        section.handle_key(key(KeyCode::Tab));
        section.handle_key(key(KeyCode::Down));
        section.handle_key(key(KeyCode::Enter));
        assert_eq!(section.selected(), Some("web"));
    }

    #[test]
    fn test_selection_is_single() {
        let mut section = CheckinSection::new();
        section.set_focus(true);

        section.handle_key(key(KeyCode::Tab));
        section.handle_key(key(KeyCode::Enter));
        assert_eq!(section.selected(), Some("sit"));

        section.handle_key(key(KeyCode::Down));
        section.handle_key(key(KeyCode::Enter));
        assert_eq!(section.selected(), Some("web"));
    }

    #[test]
    fn test_down_past_last_option_is_not_handled() {
        let mut section = CheckinSection::new();
        section.set_focus(true);
        section.handle_key(key(KeyCode::Tab));

        for _ in 0..4 {
            assert!(section.handle_key(key(KeyCode::Down)).is_handled());
        }
        assert_eq!(
            section.handle_key(key(KeyCode::Down)),
            ComponentResult::NotHandled
        );
    }

    #[test]
    fn test_up_from_first_option_returns_to_input() {
        let mut section = CheckinSection::new();
        section.set_focus(true);
        section.handle_key(key(KeyCode::Tab));

        section.handle_key(key(KeyCode::Up));
        assert!(section.focus_state().is_editing());
    }

    #[test]
    fn test_renders_all_controls() {
        let section = CheckinSection::new();
        let lines = section.render_lines(80, 40, Instant::now());
        let text: String = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Creative Corner"));
        assert!(text.contains("what are you trying to build right now?"));
        assert!(text.contains("not sure yet"));
        assert!(text.contains("saved only in this window"));
    }
}
