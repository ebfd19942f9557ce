//! Typewriter animation for incremental text reveal.

use std::time::{Duration, Instant};

/// Configuration for a [`Typewriter`] instance.
///
/// Immutable once the engine is constructed. The item list always holds at
/// least one entry: the only constructors are [`TypewriterConfig::new`]
/// (one item) and [`TypewriterConfig::and_text`] (append), so an empty
/// sequence cannot be represented.
#[derive(Debug, Clone)]
pub struct TypewriterConfig {
    texts: Vec<String>,
    type_interval: Duration,
    delete_interval: Duration,
    hold_delay: Duration,
    looping: bool,
    cursor: String,
    sound: bool,
}

/// Default per-character reveal interval.
pub const DEFAULT_TYPE_INTERVAL: Duration = Duration::from_millis(130);

/// Default per-character delete interval.
pub const DEFAULT_DELETE_INTERVAL: Duration = Duration::from_millis(50);

/// Default pause on a fully typed item before deleting it (loop mode).
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(1500);

impl TypewriterConfig {
    /// Creates a configuration that reveals a single item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            texts: vec![text.into()],
            type_interval: DEFAULT_TYPE_INTERVAL,
            delete_interval: DEFAULT_DELETE_INTERVAL,
            hold_delay: DEFAULT_HOLD_DELAY,
            looping: false,
            cursor: "|".to_string(),
            sound: false,
        }
    }

    /// Appends another item to the cycle.
    pub fn and_text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }

    /// Sets the per-character reveal interval.
    pub fn type_interval(mut self, interval: Duration) -> Self {
        self.type_interval = interval;
        self
    }

    /// Sets the per-character delete interval.
    pub fn delete_interval(mut self, interval: Duration) -> Self {
        self.delete_interval = interval;
        self
    }

    /// Sets the pause on a fully typed item before deletion starts.
    pub fn hold_delay(mut self, delay: Duration) -> Self {
        self.hold_delay = delay;
        self
    }

    /// Enables looping: type, hold, delete, advance to the next item.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Sets the cursor glyph appended after the revealed text.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Enables the per-character click request.
    pub fn sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// The items this configuration cycles through (never empty).
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// The per-character reveal interval.
    pub fn type_interval_duration(&self) -> Duration {
        self.type_interval
    }

    /// Whether click requests accompany revealed characters.
    pub fn sound_enabled(&self) -> bool {
        self.sound
    }
}

/// What a single [`Typewriter::poll`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing was due (inactive, terminal, or deadline not reached).
    Idle,
    /// One more character of the current item was revealed. The host
    /// should request a click on this same tick if sound is enabled.
    Typed(char),
    /// The current item is fully typed; holding before the delete phase.
    Hold,
    /// The hold elapsed; the delete phase starts on the next due tick.
    Deleting,
    /// The trailing character was removed.
    Deleted,
    /// The item was fully deleted; advanced to the next item.
    Advanced,
    /// Fully typed with looping off. The engine is terminal: no further
    /// deadline is scheduled and the revealed text stays complete.
    Done,
}

/// Typewriter effect that reveals text character by character.
///
/// The engine is a deadline-driven state machine: every call to
/// [`poll`](Typewriter::poll) is given the current time, and the engine
/// owns exactly one pending deadline. Scheduling a step always replaces
/// the previous deadline, so steps can never fire out of order, and
/// deactivating the engine clears the deadline outright.
///
/// Pausing is lossless: [`set_active`](Typewriter::set_active) freezes
/// the state at the last committed character boundary, and reactivating
/// resumes from exactly that point. The state is never reset by
/// visibility toggles.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use foyer_core::animation::{Step, Typewriter, TypewriterConfig};
///
/// let config = TypewriterConfig::new("hi")
///     .type_interval(Duration::from_millis(160));
/// let mut tw = Typewriter::new(config);
///
/// let t0 = Instant::now();
/// tw.set_active(true);
/// tw.poll(t0); // schedules the first character
/// assert_eq!(tw.poll(t0 + Duration::from_millis(160)), Step::Typed('h'));
/// assert_eq!(tw.poll(t0 + Duration::from_millis(320)), Step::Typed('i'));
/// ```
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    /// Prefix of the current item currently shown.
    revealed: String,
    /// Characters committed during typing, 0..=len of the current item.
    cursor_pos: usize,
    /// Whether the engine is shrinking `revealed` rather than growing it.
    deleting: bool,
    /// Waiting out the hold delay on a fully typed item.
    holding: bool,
    /// Index of the active entry of the item list.
    item_index: usize,
    /// External gate; the engine only advances while true.
    active: bool,
    /// Terminal flag for non-looping configurations.
    done: bool,
    /// The single pending deadline, if any.
    next_due: Option<Instant>,
}

impl Typewriter {
    /// Creates an inactive engine with zeroed state.
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            revealed: String::new(),
            cursor_pos: 0,
            deleting: false,
            holding: false,
            item_index: 0,
            active: false,
            done: false,
            next_due: None,
        }
    }

    /// Gates the animation. Deactivating cancels the pending deadline but
    /// freezes all other state; reactivating resumes from the frozen
    /// state, rescheduling relative to the next poll.
    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        if !active {
            self.next_due = None;
        }
    }

    /// Whether the animation is currently gated on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a non-looping engine has fully typed its item.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The currently revealed prefix.
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Characters committed during the type phase.
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Index of the active item.
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// The engine configuration.
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// The rendered fragment: revealed text plus the cursor glyph.
    ///
    /// `cursor_visible` comes from the presentational blink clock and has
    /// no effect on engine state.
    pub fn display(&self, cursor_visible: bool) -> String {
        if cursor_visible {
            format!("{}{}", self.revealed, self.config.cursor)
        } else {
            self.revealed.clone()
        }
    }

    /// Rewinds to zeroed state on the first item, keeping the config.
    pub fn reset(&mut self) {
        self.revealed.clear();
        self.cursor_pos = 0;
        self.deleting = false;
        self.holding = false;
        self.item_index = 0;
        self.done = false;
        self.next_due = None;
    }

    /// Advances the state machine if a deadline is due at `now`.
    ///
    /// While inactive or terminal this never schedules anything and the
    /// state stays frozen. Otherwise the first poll after (re)activation
    /// schedules the next step, and subsequent polls fire it once `now`
    /// reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> Step {
        if !self.active || self.done {
            return Step::Idle;
        }

        let due = match self.next_due {
            Some(due) => due,
            None => {
                self.next_due = Some(now + self.current_interval());
                return Step::Idle;
            }
        };

        if now < due {
            return Step::Idle;
        }

        self.step(now)
    }

    /// The delay the next pending step is scheduled with.
    fn current_interval(&self) -> Duration {
        if self.holding {
            self.config.hold_delay
        } else if self.deleting {
            self.config.delete_interval
        } else {
            self.config.type_interval
        }
    }

    /// Executes one due step and schedules the next deadline.
    fn step(&mut self, now: Instant) -> Step {
        if self.holding {
            // Hold elapsed: flip into the delete phase.
            self.holding = false;
            self.deleting = true;
            self.next_due = Some(now + self.config.delete_interval);
            return Step::Deleting;
        }

        if self.deleting {
            if self.revealed.pop().is_some() {
                self.next_due = Some(now + self.config.delete_interval);
                return Step::Deleted;
            }
            // Fully deleted: wrap to the next item and type from empty.
            self.deleting = false;
            self.cursor_pos = 0;
            self.item_index = (self.item_index + 1) % self.config.texts.len();
            self.next_due = Some(now + self.config.type_interval);
            return Step::Advanced;
        }

        let item = &self.config.texts[self.item_index];
        match item.chars().nth(self.cursor_pos) {
            Some(ch) => {
                self.revealed.push(ch);
                self.cursor_pos += 1;
                self.next_due = Some(now + self.config.type_interval);
                Step::Typed(ch)
            }
            None if self.config.looping => {
                // Fully typed (or a zero-length item): hold, then delete.
                self.holding = true;
                self.next_due = Some(now + self.config.hold_delay);
                Step::Hold
            }
            None => {
                tracing::trace!(item = self.item_index, "typewriter terminal");
                self.done = true;
                self.next_due = None;
                Step::Done
            }
        }
    }
}
