//! About section: static copy in a bordered panel.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use ratatui::text::Line;

use foyer_components::component::{Component, ComponentResult, FocusState};
use foyer_components::text::{blank_line, wrap_styled};
use foyer_core::style::FoyerStyle;

use super::{panel, panel_blank, panel_inner_width};

/// Copy paragraphs; styled segments keep highlighted phrases marked
/// across line wrapping.
fn paragraphs(plain: Style, marked: Style) -> Vec<Vec<(&'static str, Style)>> {
    vec![
        vec![(
            "hi, i'm jigi. i like making things, mostly out of curiosity.",
            plain,
        )],
        vec![
            ("right now, i'm spending most of my time", plain),
            ("building furniture,", marked),
            (
                "experimenting with vibe coding, and chasing small creative \"what ifs.\"",
                plain,
            ),
        ],
        vec![(
            "sometimes it's a bed frame. sometimes it's a tiny website that types nicely. \
             sometimes it's just me trying some silly ideas at 2am or moving furniture \
             around more than i probably should.",
            plain,
        )],
        vec![
            ("i have a big love for", plain),
            ("mid-century modern", marked),
            (
                "design and i'm slowly been building my space around it with hand built \
                 MCM furniture, and probably too many \"intentional\" objects.",
                plain,
            ),
        ],
        vec![(
            "this space is mostly for documenting my small creative experiments, vibe \
             coding projects, and whatever i'm currently curious about.",
            plain,
        )],
        vec![
            ("if you're also", plain),
            ("curious, multi-passionate, and slightly experimental", marked),
            ("welcomeee. this place is for you too.", plain),
        ],
    ]
}

/// The About panel. Display-only.
#[derive(Default)]
pub struct AboutSection;

impl AboutSection {
    pub fn new() -> Self {
        Self
    }
}

impl Component for AboutSection {
    type Output = ();

    fn render_lines(&self, width: u16, height: u16, _now: Instant) -> Vec<Line<'static>> {
        let inner = panel_inner_width(width);
        let plain = FoyerStyle::text();
        let marked = FoyerStyle::highlight();

        let mut body = vec![panel_blank(inner)];
        for (i, paragraph) in paragraphs(plain, marked).iter().enumerate() {
            if i > 0 {
                body.push(panel_blank(inner));
            }
            body.extend(wrap_styled(paragraph, inner, plain));
        }
        body.push(panel_blank(inner));
        body.extend(wrap_styled(&[("(scroll ↓)", FoyerStyle::faint())], inner, plain));
        body.push(panel_blank(inner));

        // The panel sits below a fixed top margin rather than centering.
        let text = FoyerStyle::text();
        let mut lines = vec![blank_line(width, text); 2];
        lines.extend(panel("About", body, width));
        lines.truncate(height as usize);
        lines
    }

    fn handle_key(&mut self, _key: KeyEvent) -> ComponentResult<Self::Output> {
        ComponentResult::NotHandled
    }

    fn focus_state(&self) -> FocusState {
        FocusState::Unfocused
    }

    fn set_focus(&mut self, _focused: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_title_and_copy() {
        let about = AboutSection::new();
        let text = rendered_text(&about.render_lines(80, 40, Instant::now()));

        assert!(text.contains("About"));
        assert!(text.contains("building furniture"));
        assert!(text.contains("(scroll ↓)"));
    }

    #[test]
    fn test_highlight_style_survives_wrapping() {
        let about = AboutSection::new();
        let lines = about.render_lines(80, 40, Instant::now());

        let marked = FoyerStyle::highlight();
        let highlighted: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.style == marked)
            .map(|s| s.content.as_ref())
            .collect();
        assert!(highlighted.contains("mid-century modern"));
    }

    #[test]
    fn test_clamps_to_height() {
        let about = AboutSection::new();
        let lines = about.render_lines(80, 10, Instant::now());
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_ignores_keys() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut about = AboutSection::new();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(about.handle_key(key), ComponentResult::NotHandled);
    }
}
