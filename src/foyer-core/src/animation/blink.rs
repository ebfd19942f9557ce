//! Cursor blink clock.

use std::time::{Duration, Instant};

/// Presentational blink phase for the typewriter cursor glyph.
///
/// Purely derived from elapsed time: the clock owns no pending work and
/// never touches engine state. All cursors sharing one clock blink in
/// sync.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    start: Instant,
    half_period: Duration,
}

impl CursorBlink {
    /// Standard half-period: 500 ms on, 500 ms off.
    pub const DEFAULT_HALF_PERIOD: Duration = Duration::from_millis(500);

    /// Creates a blink clock starting in the visible phase.
    pub fn new(start: Instant) -> Self {
        Self::with_half_period(start, Self::DEFAULT_HALF_PERIOD)
    }

    /// Creates a blink clock with a custom half-period.
    pub fn with_half_period(start: Instant, half_period: Duration) -> Self {
        Self { start, half_period }
    }

    /// Whether the cursor is in its visible phase at `now`.
    pub fn visible(&self, now: Instant) -> bool {
        let half = self.half_period.as_millis().max(1);
        let elapsed = now.saturating_duration_since(self.start).as_millis();
        (elapsed / half) % 2 == 0
    }
}
