//! # Foyer Components
//!
//! Reusable building blocks for the foyer page, on top of `foyer-core`
//! styles and ratatui primitives.
//!
//! Components render as owned [`ratatui::text::Line`] rows rather than
//! drawing straight into a buffer: the page is one tall virtual column of
//! lines, and the snap scroller windows it, so a component half scrolled
//! off the top clips for free.
//!
//! - [`component`] - the `Component` trait shared by the page sections
//! - [`input`] - grapheme-aware single-line text input
//! - [`radio`] - single-select option group
//! - [`snap`] - viewport-height section scroller with eased snapping
//! - [`text`] - line construction helpers

pub mod component;
pub mod input;
pub mod radio;
pub mod snap;
pub mod text;

pub use component::{Component, ComponentResult, FocusState};
pub use input::InputState;
pub use radio::{RadioGroup, RadioItem};
pub use snap::SnapScroller;

/// Foyer Components version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
