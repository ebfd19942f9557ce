//! # Foyer TUI
//!
//! The foyer application: a single-page terminal portfolio rendered as a
//! vertically snap-scrolling column of sections (intro, about, check-in).
//!
//! The interesting runtime logic lives in `foyer-core` (typewriter engine,
//! visibility signal); this crate assembles the page, runs the event loop,
//! and owns the keystroke click subsystem.

pub mod app;
pub mod config;
pub mod sections;
pub mod sound;
pub mod terminal;
