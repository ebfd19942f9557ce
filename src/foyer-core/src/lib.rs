//! # Foyer Core
//!
//! Animation engine and visibility primitives for the foyer terminal
//! portfolio.
//!
//! This crate provides the pieces of the page that carry actual runtime
//! logic:
//!
//! - **Animation**: the typewriter text-reveal engine, the cursor blink
//!   clock, and the easing curve used for snap scrolling. All animations
//!   are stepped by an external clock (`Instant` values passed in), which
//!   keeps them deterministic under test.
//! - **Visibility**: a viewport observer that maintains a shared boolean
//!   signal ("is this section sufficiently in view"), used to gate the
//!   typewriter engines.
//! - **Style**: the paper/ink visual identity of the page.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    Application                       │
//! │   (sections, event loop, sound side effects)         │
//! └───────────┬────────────────────────────┬─────────────┘
//!             │                            │
//! ┌───────────▼──────────────┐  ┌──────────▼─────────────┐
//! │        Animation         │  │       Visibility       │
//! │ (typewriter, blink,      │  │ (observer → ViewSignal │
//! │  easing)                 │  │  → engine `active`)    │
//! └──────────────────────────┘  └────────────────────────┘
//! ```

pub mod animation;
pub mod style;
pub mod visibility;

pub use animation::{ease_in_out, CursorBlink, Step, Typewriter, TypewriterConfig};
pub use visibility::{ViewSignal, VisibilityObserver};

/// Foyer Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
