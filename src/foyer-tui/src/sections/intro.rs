//! Intro section: the typewritten greeting.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use foyer_components::component::{Component, ComponentResult, FocusState};
use foyer_components::text::{blank_line, centered_line};
use foyer_core::animation::{CursorBlink, Step, Typewriter, TypewriterConfig};
use foyer_core::style::FoyerStyle;
use foyer_core::visibility::ViewSignal;

use crate::config::Config;
use crate::sound;

/// The greeting headline.
pub const LINE1: &str = "hi, i'm jigi. i make things.";

/// The second line, revealed after the headline finishes.
pub const LINE2: &str = "this is an ongoing project.";

/// Pause between the headline finishing and the second line appearing.
const SECOND_LINE_PAUSE: Duration = Duration::from_millis(800);

/// The typewritten greeting with its scroll hint.
///
/// Both engines are gated on the section's visibility signal, so
/// scrolling away pauses them mid-character and scrolling back resumes
/// exactly there. The second line is additionally sequenced: it mounts
/// only once the headline has had time to finish plus a beat, and the
/// mount resets when the section leaves view (the engine state behind it
/// does not).
pub struct IntroSection {
    headline: Typewriter,
    subline: Typewriter,
    blink: CursorBlink,
    signal: ViewSignal,
    second_visible: bool,
    second_due: Option<Instant>,
    click_volume: f32,
}

impl IntroSection {
    pub fn new(config: &Config, signal: ViewSignal, now: Instant) -> Self {
        let headline = Typewriter::new(
            TypewriterConfig::new(LINE1)
                .type_interval(config.type_interval())
                .delete_interval(config.delete_interval())
                .hold_delay(config.hold_delay())
                .sound(config.sound),
        );
        let subline = Typewriter::new(
            TypewriterConfig::new(LINE2)
                .type_interval(config.type_interval())
                .delete_interval(config.delete_interval())
                .hold_delay(config.hold_delay())
                .sound(config.sound),
        );

        Self {
            headline,
            subline,
            blink: CursorBlink::new(now),
            signal,
            second_visible: false,
            second_due: None,
            click_volume: config.click_volume,
        }
    }

    /// Advance sequencing and both engines; request clicks for reveals.
    pub fn on_tick(&mut self, now: Instant) {
        let in_view = self.signal.get();

        if !in_view {
            // Leaving view unmounts the second line; re-entering restarts
            // its reveal delay from scratch.
            self.second_visible = false;
            self.second_due = None;
        } else if !self.second_visible && self.second_due.is_none() {
            let config = self.headline.config();
            let typing = config
                .type_interval_duration()
                .saturating_mul(config.texts()[0].chars().count() as u32);
            self.second_due = Some(now + typing + SECOND_LINE_PAUSE);
        }

        if let Some(due) = self.second_due {
            if now >= due {
                self.second_visible = true;
                self.second_due = None;
            }
        }

        self.headline.set_active(in_view);
        self.subline.set_active(in_view && self.second_visible);

        for tw in [&mut self.headline, &mut self.subline] {
            if let Step::Typed(_) = tw.poll(now) {
                if tw.config().sound_enabled() {
                    sound::request_click(self.click_volume);
                }
            }
        }
    }

    /// Whether the second line is currently mounted.
    pub fn second_line_visible(&self) -> bool {
        self.second_visible
    }
}

impl Component for IntroSection {
    type Output = ();

    fn render_lines(&self, width: u16, height: u16, now: Instant) -> Vec<Line<'static>> {
        let blink_on = self.blink.visible(now);
        let text = FoyerStyle::text();

        let mut content = vec![centered_line(
            self.headline.display(blink_on),
            width,
            FoyerStyle::headline(),
        )];
        content.push(blank_line(width, text));
        if self.second_visible {
            content.push(centered_line(
                self.subline.display(blink_on),
                width,
                FoyerStyle::soft(),
            ));
        } else {
            content.push(blank_line(width, text));
        }

        content.push(blank_line(width, text));
        content.push(blank_line(width, text));
        content.push(centered_line(
            "scroll to explore",
            width,
            FoyerStyle::faint(),
        ));
        content.push(centered_line("↓", width, FoyerStyle::faint()));

        let top = (height as usize).saturating_sub(content.len()) / 2;
        let mut lines = vec![blank_line(width, text); top];
        lines.extend(content);
        lines.truncate(height as usize);
        lines
    }

    fn handle_key(&mut self, _key: KeyEvent) -> ComponentResult<Self::Output> {
        // Display-only section.
        ComponentResult::NotHandled
    }

    fn focus_state(&self) -> FocusState {
        FocusState::Unfocused
    }

    fn set_focus(&mut self, _focused: bool) {}
}
