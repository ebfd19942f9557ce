//! The three page sections: intro, about, and the check-in corner.
//!
//! Each section renders as a full viewport-height block of lines and
//! implements the `Component` trait for key routing. Sections never talk
//! to each other; the app stacks them into one page column and the snap
//! scroller windows it.

mod about;
mod checkin;
mod intro;

pub use about::AboutSection;
pub use checkin::CheckinSection;
pub use intro::IntroSection;

use ratatui::text::{Line, Span};

use foyer_components::text::{blank_line, padded_spans};
use foyer_core::style::FoyerStyle;

/// Number of sections on the page.
pub const SECTION_COUNT: usize = 3;

/// Widest a panel's content column gets, in columns.
const PANEL_MAX_INNER: u16 = 72;

/// Builds the bordered panel shared by the about and check-in sections:
/// a title row with a `▲` marker, a rule, and the body inset by one
/// column, centered within `width`.
pub(crate) fn panel(title: &str, body: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    let inner = panel_inner_width(width);
    if inner == 0 {
        return Vec::new();
    }
    let margin = (width.saturating_sub(inner + 4)) / 2;
    let margin_span = || Span::styled(" ".repeat(margin as usize), FoyerStyle::text());

    let frame = |line: String| -> Line<'static> {
        padded_spans(
            vec![margin_span(), Span::styled(line, FoyerStyle::rule())],
            width,
            FoyerStyle::text(),
        )
    };

    let rule = "─".repeat(inner as usize + 2);
    let mut out = Vec::with_capacity(body.len() + 4);
    out.push(frame(format!("┌{rule}┐")));

    // Title row: name on the left, marker on the right.
    let gap = (inner as usize).saturating_sub(title.chars().count() + 1);
    out.push(padded_spans(
        vec![
            margin_span(),
            Span::styled("│ ", FoyerStyle::rule()),
            Span::styled(title.to_string(), FoyerStyle::title()),
            Span::styled(" ".repeat(gap), FoyerStyle::text()),
            Span::styled("▲", FoyerStyle::faint()),
            Span::styled(" │", FoyerStyle::rule()),
        ],
        width,
        FoyerStyle::text(),
    ));
    out.push(frame(format!("├{rule}┤")));

    for line in body {
        let mut spans = vec![margin_span(), Span::styled("│ ", FoyerStyle::rule())];
        spans.extend(pad_line(line, inner));
        spans.push(Span::styled(" │", FoyerStyle::rule()));
        out.push(padded_spans(spans, width, FoyerStyle::text()));
    }

    out.push(frame(format!("└{rule}┘")));
    out
}

/// A body row of `inner` blank columns for panel spacing.
pub(crate) fn panel_blank(inner: u16) -> Line<'static> {
    blank_line(inner, FoyerStyle::text())
}

/// The inner content width [`panel`] will give body lines at `width`.
pub(crate) fn panel_inner_width(width: u16) -> u16 {
    width.saturating_sub(6).min(PANEL_MAX_INNER)
}

/// Pads a body line's spans out to exactly `inner` columns.
fn pad_line(line: Line<'static>, inner: u16) -> Vec<Span<'static>> {
    use unicode_width::UnicodeWidthStr;

    let mut spans = line.spans;
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let pad = (inner as usize).saturating_sub(used);
    if pad > 0 {
        spans.push(Span::styled(" ".repeat(pad), FoyerStyle::text()));
    }
    spans
}
