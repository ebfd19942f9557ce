//! Easing functions for scroll animation.

/// Ease-in-out curve for smooth snap-scroll motion.
///
/// Cubic on both ends: slow start, fast middle, slow settle.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
