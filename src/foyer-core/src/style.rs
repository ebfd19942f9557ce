//! Foyer Theme - Paper/Ink Visual Identity
//!
//! A monochrome, print-inspired theme: warm paper background, near-black
//! ink, and a single marker-yellow highlight. All colors are constants so
//! every frame renders without allocation.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// SURFACE COLORS - Paper base
// ============================================================

/// Main background - warm paper white
pub const PAPER: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Slightly sunken surface - input fields, wells
pub const PAPER_DIM: Color = Color::Rgb(244, 244, 242); // #F4F4F2

// ============================================================
// INK COLORS - Text
// ============================================================

/// Primary text - near-black ink
pub const INK: Color = Color::Rgb(17, 17, 17); // #111111

/// Secondary text - 80% ink
pub const INK_SOFT: Color = Color::Rgb(68, 68, 68); // #444444

/// Muted text - hints and footnotes
pub const INK_FAINT: Color = Color::Rgb(140, 140, 140); // #8C8C8C

// ============================================================
// ACCENT COLORS
// ============================================================

/// Highlighter - marker yellow behind emphasized phrases
pub const HIGHLIGHT: Color = Color::Rgb(255, 243, 196); // #FFF3C4

/// Border - solid ink rules around panels
pub const RULE: Color = Color::Rgb(17, 17, 17); // #111111

// ============================================================
// STYLE HELPERS
// ============================================================

/// Style presets for the foyer identity.
pub struct FoyerStyle;

impl FoyerStyle {
    /// Body text on paper.
    pub fn text() -> Style {
        Style::default().fg(INK).bg(PAPER)
    }

    /// Secondary text.
    pub fn soft() -> Style {
        Style::default().fg(INK_SOFT).bg(PAPER)
    }

    /// Hints, footnotes, "(scroll ↓)" markers.
    pub fn faint() -> Style {
        Style::default().fg(INK_FAINT).bg(PAPER)
    }

    /// Marker-highlighted phrase.
    pub fn highlight() -> Style {
        Style::default().fg(INK).bg(HIGHLIGHT)
    }

    /// Panel titles ("About", "Creative Corner").
    pub fn title() -> Style {
        Style::default()
            .fg(INK)
            .bg(PAPER)
            .add_modifier(Modifier::BOLD)
    }

    /// The typewriter headline.
    pub fn headline() -> Style {
        Style::default()
            .fg(INK)
            .bg(PAPER)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel border rules.
    pub fn rule() -> Style {
        Style::default().fg(RULE).bg(PAPER)
    }
}
