//! Viewport visibility observation.
//!
//! A [`VisibilityObserver`] watches one page region and maintains a shared
//! boolean cell that is true exactly while the region's visible fraction
//! meets a threshold. Engines read the cell through cloned [`ViewSignal`]
//! handles each tick; the observer is the only writer.
//!
//! There are no error semantics: if the observer is never given viewport
//! geometry, the signal simply never becomes true and whatever it gates
//! stays dormant.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default visible fraction required for a region to count as in view.
pub const DEFAULT_THRESHOLD: f32 = 0.6;

/// Read handle to an observer's boolean cell.
///
/// Cheap to clone; all clones observe the same cell.
#[derive(Debug, Clone, Default)]
pub struct ViewSignal(Arc<AtomicBool>);

impl ViewSignal {
    /// Whether the observed region is currently in view.
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Watches one vertical page region against the viewport.
///
/// Regions and viewports are row spans in page coordinates (the page is a
/// single tall column; the viewport is the window the terminal shows).
/// Call [`observe`](Self::observe) whenever the scroll position changes,
/// typically once per frame, and hand [`signal`](Self::signal) clones to
/// whatever the visibility gates.
#[derive(Debug)]
pub struct VisibilityObserver {
    threshold: f32,
    cell: Arc<AtomicBool>,
    connected: bool,
}

impl VisibilityObserver {
    /// Creates an observer with the given intersection threshold,
    /// clamped to `0.0..=1.0`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            cell: Arc::new(AtomicBool::new(false)),
            connected: true,
        }
    }

    /// The configured intersection threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// A read handle to the in-view cell.
    pub fn signal(&self) -> ViewSignal {
        ViewSignal(Arc::clone(&self.cell))
    }

    /// Updates the cell from the current geometry.
    ///
    /// `region` is the watched span and `viewport` the visible span, both
    /// as `(top_row, row_count)` in page coordinates. A zero-height
    /// region counts as fully visible when any part of it intersects the
    /// viewport.
    pub fn observe(&self, region: (f32, f32), viewport: (f32, f32)) {
        if !self.connected {
            return;
        }
        let fraction = overlap_fraction(region, viewport);
        self.cell
            .store(fraction >= self.threshold, Ordering::Relaxed);
    }

    /// Stops observing: the cell is forced false and later `observe`
    /// calls become no-ops. Dropping the observer does the same.
    pub fn disconnect(&mut self) {
        if self.connected {
            tracing::debug!("visibility observer disconnected");
            self.connected = false;
            self.cell.store(false, Ordering::Relaxed);
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Fraction of `region` covered by `viewport`, in `0.0..=1.0`.
fn overlap_fraction(region: (f32, f32), viewport: (f32, f32)) -> f32 {
    let (top, height) = region;
    let (view_top, view_height) = viewport;

    let lo = top.max(view_top);
    let hi = (top + height).min(view_top + view_height);
    let overlap = (hi - lo).max(0.0);

    if height <= 0.0 {
        // Degenerate region: visible iff it sits inside the viewport.
        if top >= view_top && top <= view_top + view_height {
            1.0
        } else {
            0.0
        }
    } else {
        overlap / height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_starts_false() {
        let obs = VisibilityObserver::new(DEFAULT_THRESHOLD);
        assert!(!obs.signal().get());
    }

    #[test]
    fn test_fully_visible_region() {
        let obs = VisibilityObserver::new(0.6);
        let signal = obs.signal();

        obs.observe((0.0, 30.0), (0.0, 30.0));
        assert!(signal.get());
    }

    #[test]
    fn test_threshold_boundary() {
        let obs = VisibilityObserver::new(0.6);
        let signal = obs.signal();

        // 18 of 30 rows visible: exactly 0.6.
        obs.observe((12.0, 30.0), (0.0, 30.0));
        assert!(signal.get());

        // 17 of 30 rows: just below.
        obs.observe((13.0, 30.0), (0.0, 30.0));
        assert!(!signal.get());
    }

    #[test]
    fn test_scrolled_out_region() {
        let obs = VisibilityObserver::new(0.6);
        let signal = obs.signal();

        obs.observe((0.0, 30.0), (0.0, 30.0));
        assert!(signal.get());

        obs.observe((0.0, 30.0), (60.0, 30.0));
        assert!(!signal.get());
    }

    #[test]
    fn test_signal_clones_share_cell() {
        let obs = VisibilityObserver::new(0.5);
        let a = obs.signal();
        let b = a.clone();

        obs.observe((0.0, 10.0), (0.0, 10.0));
        assert!(a.get());
        assert!(b.get());
    }

    #[test]
    fn test_disconnect_forces_false_and_freezes() {
        let mut obs = VisibilityObserver::new(0.5);
        let signal = obs.signal();

        obs.observe((0.0, 10.0), (0.0, 10.0));
        assert!(signal.get());

        obs.disconnect();
        assert!(!signal.get());

        // Observation after disconnect is a no-op.
        obs.observe((0.0, 10.0), (0.0, 10.0));
        assert!(!signal.get());
    }

    #[test]
    fn test_drop_releases_signal() {
        let signal;
        {
            let obs = VisibilityObserver::new(0.5);
            signal = obs.signal();
            obs.observe((0.0, 10.0), (0.0, 10.0));
            assert!(signal.get());
        }
        assert!(!signal.get());
    }

    #[test]
    fn test_threshold_is_clamped() {
        let obs = VisibilityObserver::new(7.5);
        assert_eq!(obs.threshold(), 1.0);

        let obs = VisibilityObserver::new(-1.0);
        assert_eq!(obs.threshold(), 0.0);
    }
}
