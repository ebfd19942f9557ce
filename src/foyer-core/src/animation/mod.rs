//! Animation primitives for the foyer page.
//!
//! Everything here is stepped by an external clock: callers pass the
//! current `Instant` in, and nothing sleeps or spawns. That makes the
//! animations deterministic under test (any sequence of instants is a
//! valid schedule) and keeps all state transitions on the frame loop.

mod blink;
mod easing;
mod typewriter;

pub use blink::CursorBlink;
pub use easing::ease_in_out;
pub use typewriter::{
    Step, Typewriter, TypewriterConfig, DEFAULT_DELETE_INTERVAL, DEFAULT_HOLD_DELAY,
    DEFAULT_TYPE_INTERVAL,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn quick(config: TypewriterConfig) -> TypewriterConfig {
        config
            .type_interval(Duration::from_millis(10))
            .delete_interval(Duration::from_millis(5))
            .hold_delay(Duration::from_millis(100))
    }

    #[test]
    fn test_typewriter_initial_state() {
        let tw = Typewriter::new(TypewriterConfig::new("hello"));
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.cursor_pos(), 0);
        assert_eq!(tw.item_index(), 0);
        assert!(!tw.is_active());
        assert!(!tw.is_done());
    }

    #[test]
    fn test_typewriter_inactive_never_schedules() {
        let mut tw = Typewriter::new(TypewriterConfig::new("hello"));
        let t0 = Instant::now();

        assert_eq!(tw.poll(t0), Step::Idle);
        assert_eq!(tw.poll(at(t0, 60_000)), Step::Idle);
        assert_eq!(tw.revealed(), "");
    }

    #[test]
    fn test_typewriter_terminal_when_not_looping() {
        // Property: after len(text) due ticks the full text is revealed
        // and no further tick changes state.
        let config = TypewriterConfig::new("hi").type_interval(Duration::from_millis(160));
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        assert_eq!(tw.poll(t0), Step::Idle);
        assert_eq!(tw.revealed(), "");

        assert_eq!(tw.poll(at(t0, 160)), Step::Typed('h'));
        assert_eq!(tw.revealed(), "h");

        assert_eq!(tw.poll(at(t0, 320)), Step::Typed('i'));
        assert_eq!(tw.revealed(), "hi");

        assert_eq!(tw.poll(at(t0, 480)), Step::Done);
        assert!(tw.is_done());

        // Long after the fact, nothing moves.
        assert_eq!(tw.poll(at(t0, 10_000)), Step::Idle);
        assert_eq!(tw.revealed(), "hi");
    }

    #[test]
    fn test_typewriter_loop_cycles_single_item() {
        let config = quick(TypewriterConfig::new("ab")).looping();
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        assert_eq!(tw.poll(t0), Step::Idle);
        assert_eq!(tw.poll(at(t0, 10)), Step::Typed('a'));
        assert_eq!(tw.poll(at(t0, 20)), Step::Typed('b'));

        // Fully typed: hold for the configured delay.
        assert_eq!(tw.poll(at(t0, 30)), Step::Hold);
        assert_eq!(tw.poll(at(t0, 50)), Step::Idle);
        assert_eq!(tw.revealed(), "ab");

        // Hold elapsed at t=130, then characters shrink one per tick.
        assert_eq!(tw.poll(at(t0, 130)), Step::Deleting);
        assert_eq!(tw.poll(at(t0, 135)), Step::Deleted);
        assert_eq!(tw.revealed(), "a");
        assert_eq!(tw.poll(at(t0, 140)), Step::Deleted);
        assert_eq!(tw.revealed(), "");

        // Empty again: wrap (single item wraps to itself) and retype.
        assert_eq!(tw.poll(at(t0, 145)), Step::Advanced);
        assert_eq!(tw.item_index(), 0);
        assert_eq!(tw.cursor_pos(), 0);
        assert_eq!(tw.poll(at(t0, 155)), Step::Typed('a'));
        assert_eq!(tw.revealed(), "a");
    }

    #[test]
    fn test_typewriter_pause_resume_is_lossless() {
        // Property: deactivating mid-type freezes the committed boundary;
        // reactivating resumes from exactly that state.
        let config = quick(TypewriterConfig::new("hello"));
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        tw.poll(t0);
        assert_eq!(tw.poll(at(t0, 10)), Step::Typed('h'));
        assert_eq!(tw.poll(at(t0, 20)), Step::Typed('e'));

        tw.set_active(false);
        // A stale deadline can never fire while paused.
        assert_eq!(tw.poll(at(t0, 30)), Step::Idle);
        assert_eq!(tw.poll(at(t0, 5_000)), Step::Idle);
        assert_eq!(tw.revealed(), "he");
        assert_eq!(tw.cursor_pos(), 2);

        // Resume much later: same state, next character on schedule.
        tw.set_active(true);
        assert_eq!(tw.poll(at(t0, 6_000)), Step::Idle);
        assert_eq!(tw.revealed(), "he");
        assert_eq!(tw.poll(at(t0, 6_010)), Step::Typed('l'));
        assert_eq!(tw.revealed(), "hel");
    }

    #[test]
    fn test_typewriter_multi_item_advances() {
        // Property: after item 0's type→hold→delete cycle, the engine
        // types item 1 from empty.
        let config = quick(TypewriterConfig::new("a").and_text("bb")).looping();
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        tw.poll(t0);
        assert_eq!(tw.poll(at(t0, 10)), Step::Typed('a'));
        assert_eq!(tw.poll(at(t0, 20)), Step::Hold);
        assert_eq!(tw.poll(at(t0, 120)), Step::Deleting);
        assert_eq!(tw.poll(at(t0, 125)), Step::Deleted);
        assert_eq!(tw.revealed(), "");

        assert_eq!(tw.poll(at(t0, 130)), Step::Advanced);
        assert_eq!(tw.item_index(), 1);
        assert_eq!(tw.cursor_pos(), 0);

        assert_eq!(tw.poll(at(t0, 140)), Step::Typed('b'));
        assert_eq!(tw.poll(at(t0, 150)), Step::Typed('b'));
        assert_eq!(tw.revealed(), "bb");
    }

    #[test]
    fn test_typewriter_empty_item_passes_through() {
        // A zero-length item reaches the fully-typed branch on its first
        // due tick.
        let config = quick(TypewriterConfig::new("")).looping();
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        tw.poll(t0);
        assert_eq!(tw.poll(at(t0, 10)), Step::Hold);
        assert_eq!(tw.revealed(), "");
    }

    #[test]
    fn test_typewriter_empty_item_terminal_without_loop() {
        let config = quick(TypewriterConfig::new(""));
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        tw.poll(t0);
        assert_eq!(tw.poll(at(t0, 10)), Step::Done);
        assert!(tw.is_done());
    }

    #[test]
    fn test_typewriter_pause_during_delete_phase() {
        let config = quick(TypewriterConfig::new("ab")).looping();
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        tw.poll(t0);
        tw.poll(at(t0, 10));
        tw.poll(at(t0, 20));
        tw.poll(at(t0, 30)); // hold
        tw.poll(at(t0, 130)); // deleting
        assert_eq!(tw.poll(at(t0, 135)), Step::Deleted);
        assert_eq!(tw.revealed(), "a");

        tw.set_active(false);
        assert_eq!(tw.poll(at(t0, 1_000)), Step::Idle);
        assert_eq!(tw.revealed(), "a");

        tw.set_active(true);
        tw.poll(at(t0, 2_000));
        assert_eq!(tw.poll(at(t0, 2_005)), Step::Deleted);
        assert_eq!(tw.revealed(), "");
    }

    #[test]
    fn test_typewriter_multibyte_characters() {
        let config = quick(TypewriterConfig::new("日本"));
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);

        tw.poll(t0);
        assert_eq!(tw.poll(at(t0, 10)), Step::Typed('日'));
        assert_eq!(tw.revealed(), "日");
        assert_eq!(tw.poll(at(t0, 20)), Step::Typed('本'));
        assert_eq!(tw.poll(at(t0, 30)), Step::Done);
        assert_eq!(tw.revealed(), "日本");
    }

    #[test]
    fn test_typewriter_display_appends_cursor() {
        let config = quick(TypewriterConfig::new("hi").cursor("▌"));
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);
        tw.poll(t0);
        tw.poll(at(t0, 10));

        assert_eq!(tw.display(true), "h▌");
        assert_eq!(tw.display(false), "h");
    }

    #[test]
    fn test_typewriter_reset() {
        let config = quick(TypewriterConfig::new("hi"));
        let mut tw = Typewriter::new(config);
        let t0 = Instant::now();
        tw.set_active(true);
        tw.poll(t0);
        tw.poll(at(t0, 10));
        assert_eq!(tw.revealed(), "h");

        tw.reset();
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.cursor_pos(), 0);
        assert!(!tw.is_done());
    }

    #[test]
    fn test_blink_phases() {
        let t0 = Instant::now();
        let blink = CursorBlink::new(t0);

        assert!(blink.visible(t0));
        assert!(blink.visible(at(t0, 499)));
        assert!(!blink.visible(at(t0, 500)));
        assert!(!blink.visible(at(t0, 999)));
        assert!(blink.visible(at(t0, 1_000)));
    }

    #[test]
    fn test_ease_in_out_bounds() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(1.0) - 1.0).abs() < 0.001);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);

        // Monotone over [0, 1].
        let mut prev = 0.0;
        for i in 0..=20 {
            let v = ease_in_out(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
