//! Line construction helpers.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// A full-width blank line in the given style.
pub fn blank_line(width: u16, style: Style) -> Line<'static> {
    Line::from(Span::styled(" ".repeat(width as usize), style))
}

/// Centers pre-styled spans within `width`, padding both sides with
/// `fill` so the background covers the whole row.
pub fn centered_spans(
    spans: Vec<Span<'static>>,
    width: u16,
    fill: Style,
) -> Line<'static> {
    let content: usize = spans.iter().map(|s| s.content.width()).sum();
    let width = width as usize;
    let left = width.saturating_sub(content) / 2;
    let right = width.saturating_sub(content + left);

    let mut out = Vec::with_capacity(spans.len() + 2);
    if left > 0 {
        out.push(Span::styled(" ".repeat(left), fill));
    }
    out.extend(spans);
    if right > 0 {
        out.push(Span::styled(" ".repeat(right), fill));
    }
    Line::from(out)
}

/// Centers a single piece of text within `width`.
pub fn centered_line(text: impl Into<String>, width: u16, style: Style) -> Line<'static> {
    centered_spans(vec![Span::styled(text.into(), style)], width, style)
}

/// Left-aligns spans and pads the remainder of the row with `fill`.
pub fn padded_spans(spans: Vec<Span<'static>>, width: u16, fill: Style) -> Line<'static> {
    let content: usize = spans.iter().map(|s| s.content.width()).sum();
    let pad = (width as usize).saturating_sub(content);

    let mut out = spans;
    if pad > 0 {
        out.push(Span::styled(" ".repeat(pad), fill));
    }
    Line::from(out)
}

/// Greedy word-wrap over styled segments.
///
/// Segments keep their styles across wrapping, so a highlighted phrase
/// stays highlighted wherever the break lands. Spaces between two words
/// of the same style inherit it (a multi-word highlight reads as one
/// block); all other gaps and the end-of-line padding use `fill`.
pub fn wrap_styled(
    segments: &[(&str, Style)],
    width: u16,
    fill: Style,
) -> Vec<Line<'static>> {
    let words: Vec<(String, Style)> = segments
        .iter()
        .flat_map(|(text, style)| {
            text.split_whitespace()
                .map(move |w| (w.to_string(), *style))
        })
        .collect();

    let max = (width as usize).max(1);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;
    let mut last_style: Option<Style> = None;

    for (word, style) in words {
        let word_width = word.width();
        let gap = usize::from(current_width > 0);

        if current_width > 0 && current_width + gap + word_width > max {
            lines.push(padded_spans(std::mem::take(&mut current), width, fill));
            current_width = 0;
            last_style = None;
        }

        if current_width > 0 {
            let gap_style = if last_style == Some(style) { style } else { fill };
            current.push(Span::styled(" ".to_string(), gap_style));
            current_width += 1;
        }
        current_width += word_width;
        current.push(Span::styled(word, style));
        last_style = Some(style);
    }

    if !current.is_empty() {
        lines.push(padded_spans(current, width, fill));
    }
    lines
}
