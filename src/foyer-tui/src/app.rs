//! Application state and the main event loop.
//!
//! One tokio task owns everything: a frame interval drives animation
//! polling and rendering, and the crossterm event stream feeds input.
//! All engine state transitions happen here, on timer ticks, so there is
//! no cross-task state besides the audio channel.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use futures::StreamExt;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::time::MissedTickBehavior;

use foyer_components::component::Component;
use foyer_components::snap::SnapScroller;
use foyer_components::text::blank_line;
use foyer_core::style::FoyerStyle;
use foyer_core::visibility::VisibilityObserver;

use crate::config::Config;
use crate::sections::{AboutSection, CheckinSection, IntroSection, SECTION_COUNT};
use crate::sound;
use crate::terminal;

/// Frame cadence of the render loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(8);

/// Index of the check-in section (the only focusable one).
const CHECKIN_INDEX: usize = 2;

/// The assembled page.
pub struct App {
    intro: IntroSection,
    about: AboutSection,
    checkin: CheckinSection,
    snap: SnapScroller,
    observer: VisibilityObserver,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, viewport_rows: u16, now: Instant) -> Self {
        let observer = VisibilityObserver::new(config.view_threshold);
        let intro = IntroSection::new(config, observer.signal(), now);

        Self {
            intro,
            about: AboutSection::new(),
            checkin: CheckinSection::new(),
            snap: SnapScroller::new(SECTION_COUNT, viewport_rows),
            observer,
            should_quit: false,
        }
    }

    /// Whether the loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The snapped section index.
    pub fn current_section(&self) -> usize {
        self.snap.current()
    }

    /// Per-frame update: scroll animation, visibility, engines, focus.
    pub fn on_tick(&mut self, now: Instant) {
        self.snap.tick(now);

        // The observer watches the intro section; its signal gates both
        // typewriters.
        self.observer
            .observe(self.snap.section_span(0), self.snap.viewport_span());

        self.intro.on_tick(now);

        self.checkin
            .set_focus(self.snap.current() == CHECKIN_INDEX && !self.snap.animating());
    }

    /// Handle one input event.
    pub fn on_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                // Any key counts as the unlocking interaction.
                sound::unlock();
                self.on_key(key, now);
            }
            Event::Mouse(mouse) => {
                sound::unlock();
                match mouse.kind {
                    MouseEventKind::ScrollDown => self.snap.snap_next(now),
                    MouseEventKind::ScrollUp => self.snap.snap_prev(now),
                    _ => {}
                }
            }
            Event::Resize(_, rows) => self.snap.resize(rows),
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The snapped section gets the first look at the key.
        let handled = match self.snap.current() {
            0 => self.intro.handle_key(key).is_handled(),
            1 => self.about.handle_key(key).is_handled(),
            _ => self.checkin.handle_key(key).is_handled(),
        };
        if handled {
            return;
        }

        let editing = self.snap.current() == CHECKIN_INDEX
            && self.checkin.focus_state().is_editing();

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if !editing => self.should_quit = true,
            KeyCode::Down | KeyCode::PageDown => self.snap.snap_next(now),
            KeyCode::Up | KeyCode::PageUp => self.snap.snap_prev(now),
            KeyCode::Char('j') if !editing => self.snap.snap_next(now),
            KeyCode::Char('k') if !editing => self.snap.snap_prev(now),
            KeyCode::Home if !editing => self.snap.snap_to(0, now),
            KeyCode::End if !editing => self.snap.snap_to(SECTION_COUNT - 1, now),
            _ => {}
        }
    }

    /// The visible window of the page column.
    fn page_lines(&self, width: u16, height: u16, now: Instant) -> Vec<Line<'static>> {
        let text = FoyerStyle::text();
        let mut page: Vec<Line<'static>> = Vec::with_capacity(SECTION_COUNT * height as usize);

        for index in 0..SECTION_COUNT {
            let mut lines = match index {
                0 => self.intro.render_lines(width, height, now),
                1 => self.about.render_lines(width, height, now),
                _ => self.checkin.render_lines(width, height, now),
            };
            lines.truncate(height as usize);
            while lines.len() < height as usize {
                lines.push(blank_line(width, text));
            }
            page.extend(lines);
        }

        let offset = self.snap.offset_rows().min(page.len());
        let end = (offset + height as usize).min(page.len());
        page[offset..end].to_vec()
    }

    /// Draw the current window into the frame.
    pub fn render(&mut self, frame: &mut Frame<'_>, now: Instant) {
        let area = frame.area();
        if area.height != self.snap.viewport_rows() {
            self.snap.resize(area.height);
        }

        let lines = self.page_lines(area.width, area.height, now);
        frame.render_widget(Paragraph::new(lines).style(FoyerStyle::text()), area);

        // Key hints for the one interactive section, on the bottom row.
        if self.snap.current() == CHECKIN_INDEX && !self.snap.animating() && area.height > 1 {
            let mut spans = Vec::new();
            for (key, desc) in self.checkin.key_hints() {
                spans.push(Span::styled(key, FoyerStyle::title()));
                spans.push(Span::styled(format!(" {desc}  "), FoyerStyle::faint()));
            }
            let hint_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(spans)).style(FoyerStyle::text()),
                hint_area,
            );
        }
    }
}

/// Run the page until the user quits.
pub async fn run(config: Config) -> Result<()> {
    let (mut terminal, mut guard) = terminal::setup()?;
    let size = terminal.size()?;

    let mut app = App::new(&config, size.height, Instant::now());
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(
        sections = SECTION_COUNT,
        rows = size.height,
        "starting page loop"
    );

    while !app.should_quit() {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.on_tick(now);
                terminal.draw(|frame| app.render(frame, now))?;
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => app.on_event(event, Instant::now()),
                    Some(Err(err)) => tracing::warn!("input stream error: {err}"),
                    None => break,
                }
            }
        }
    }

    guard.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(&Config::default(), 30, Instant::now())
    }

    fn settle(app: &mut App, now: Instant) {
        // Run the snap animation to completion.
        for ms in 0..400u64 {
            app.on_tick(now + Duration::from_millis(ms));
        }
    }

    #[test]
    fn test_page_down_snaps_sections() {
        let mut app = app();
        let t0 = Instant::now();

        assert_eq!(app.current_section(), 0);
        app.on_event(key(KeyCode::PageDown), t0);
        assert_eq!(app.current_section(), 1);

        app.on_event(key(KeyCode::PageDown), t0);
        assert_eq!(app.current_section(), 2);

        app.on_event(key(KeyCode::PageDown), t0);
        assert_eq!(app.current_section(), 2);
    }

    #[test]
    fn test_wheel_scroll_navigates() {
        use crossterm::event::{MouseButton, MouseEvent};

        let mut app = app();
        let t0 = Instant::now();

        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };

        app.on_event(wheel(MouseEventKind::ScrollDown), t0);
        assert_eq!(app.current_section(), 1);
        app.on_event(wheel(MouseEventKind::ScrollUp), t0);
        assert_eq!(app.current_section(), 0);

        // Clicks do not navigate.
        app.on_event(wheel(MouseEventKind::Down(MouseButton::Left)), t0);
        assert_eq!(app.current_section(), 0);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.on_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Instant::now(),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_quits_outside_editing() {
        let mut app = app();
        app.on_event(key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_in_checkin_does_not_quit() {
        let mut app = app();
        let t0 = Instant::now();

        app.on_event(key(KeyCode::End), t0);
        settle(&mut app, t0);
        assert_eq!(app.current_section(), 2);

        // The check-in input has focus; 'q' is a character, not quit.
        app.on_event(key(KeyCode::Char('q')), t0 + Duration::from_millis(400));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        app.on_event(Event::Resize(80, 44), Instant::now());

        let lines = app.page_lines(80, 44, Instant::now());
        assert_eq!(lines.len(), 44);
    }

    #[test]
    fn test_page_lines_window_is_viewport_sized() {
        let mut app = app();
        let t0 = Instant::now();

        assert_eq!(app.page_lines(80, 30, t0).len(), 30);

        app.on_event(key(KeyCode::PageDown), t0);
        settle(&mut app, t0);
        assert_eq!(app.page_lines(80, 30, t0 + Duration::from_millis(400)).len(), 30);
    }
}
