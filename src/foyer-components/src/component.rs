//! Core Component trait and types.
//!
//! Every interactive region of the page implements [`Component`], which
//! gives the event loop one consistent interface for key routing, focus,
//! and line-based rendering.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::text::Line;

/// Result of handling a key event in a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// Component handled the event, continue displaying
    Handled,
    /// Component did not handle the event, propagate to the page
    NotHandled,
    /// Component completed with a value
    Done(T),
    /// Component was cancelled (e.g., Escape pressed)
    Cancelled,
}

impl<T> ComponentResult<T> {
    /// Returns true if the component handled the event.
    pub fn is_handled(&self) -> bool {
        matches!(self, ComponentResult::Handled | ComponentResult::Done(_))
    }

    /// Returns true if the component is done (completed or cancelled).
    pub fn is_done(&self) -> bool {
        matches!(self, ComponentResult::Done(_) | ComponentResult::Cancelled)
    }

    /// Maps the inner value if Done.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ComponentResult<U> {
        match self {
            ComponentResult::Handled => ComponentResult::Handled,
            ComponentResult::NotHandled => ComponentResult::NotHandled,
            ComponentResult::Done(v) => ComponentResult::Done(f(v)),
            ComponentResult::Cancelled => ComponentResult::Cancelled,
        }
    }
}

/// Focus state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Component is not focused
    #[default]
    Unfocused,
    /// Component has focus
    Focused,
    /// Component has focus and is in edit/input mode
    Editing,
}

impl FocusState {
    /// Returns true if the component has any form of focus.
    pub fn has_focus(&self) -> bool {
        !matches!(self, FocusState::Unfocused)
    }

    /// Returns true if the component is in editing mode.
    pub fn is_editing(&self) -> bool {
        matches!(self, FocusState::Editing)
    }
}

/// Core trait for the page sections.
///
/// Rendering is line-based: a component produces up to `height` owned
/// lines for the given width, and the caller stacks them into the page
/// column. `now` drives time-based content (typewriters, blink); a
/// component with static content ignores it.
pub trait Component {
    /// The type of value this component produces when completed.
    type Output;

    /// Render the component as at most `height` lines of `width` columns.
    fn render_lines(&self, width: u16, height: u16, now: Instant) -> Vec<Line<'static>>;

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// Returns the current focus state of the component.
    fn focus_state(&self) -> FocusState;

    /// Set the focus state of the component.
    fn set_focus(&mut self, focused: bool);

    /// Returns key hints to display for this component.
    ///
    /// Each tuple is (key_label, description).
    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_result_is_handled() {
        assert!(ComponentResult::<()>::Handled.is_handled());
        assert!(ComponentResult::Done(42).is_handled());
        assert!(!ComponentResult::<()>::NotHandled.is_handled());
        assert!(!ComponentResult::<()>::Cancelled.is_handled());
    }

    #[test]
    fn test_component_result_is_done() {
        assert!(!ComponentResult::<()>::Handled.is_done());
        assert!(ComponentResult::Done(42).is_done());
        assert!(ComponentResult::<()>::Cancelled.is_done());
    }

    #[test]
    fn test_component_result_map() {
        let result: ComponentResult<i32> = ComponentResult::Done(21);
        assert_eq!(result.map(|x| x * 2), ComponentResult::Done(42));

        let handled: ComponentResult<i32> = ComponentResult::Handled;
        assert_eq!(handled.map(|x| x * 2), ComponentResult::Handled);
    }

    #[test]
    fn test_focus_state() {
        assert!(!FocusState::Unfocused.has_focus());
        assert!(FocusState::Focused.has_focus());
        assert!(FocusState::Editing.has_focus());
        assert!(FocusState::Editing.is_editing());
        assert!(!FocusState::Focused.is_editing());
    }
}
