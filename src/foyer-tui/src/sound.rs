//! Keystroke click synthesis for the typewriter.
//!
//! Every revealed character may request a short percussive click: a
//! high-pass-filtered noise burst with a fast attack/decay envelope,
//! approximating a mechanical key. One process-wide audio output is
//! shared by every typewriter instance.
//!
//! Playback is handled on a dedicated thread since the audio output
//! stream should live for the whole process and stay off the render
//! loop. Requests cross to it through a bounded channel.
//!
//! Two gates sit in front of the synth:
//!
//! - an unlock state machine (`Uninitialized → Suspended → Running`):
//!   the output is constructed lazily on first need, but clicks stay
//!   inaudible until the first user interaction of any kind; once
//!   running it never suspends again for the process lifetime.
//! - a global rate limit shared by all instances: requests closer than
//!   80 ms to the last played click are silently dropped, never queued.
//!
//! Missing audio hardware degrades to silence, not to an error. On
//! Linux, ALSA error chatter (e.g. "cannot find card 0") is suppressed
//! during initialization so headless systems stay quiet.

use std::sync::mpsc;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

use rodio::buffer::SamplesBuffer;
use rodio::OutputStream;

/// Sample rate of the synthesized click.
const SAMPLE_RATE: u32 = 44_100;

/// Total click length, including decay tail room.
const CLICK_LEN: Duration = Duration::from_millis(30);

/// Length of the noise burst that seeds the click.
const BURST_LEN: Duration = Duration::from_millis(20);

/// High-pass cutoff shaping the burst into a "click" rather than a thud.
const HIGHPASS_HZ: f32 = 1_800.0;

/// Attack ramp length.
const ATTACK: Duration = Duration::from_millis(2);

/// Near-silence floor the exponential envelope ramps from and to.
const ENVELOPE_FLOOR: f32 = 0.0001;

/// Minimum gap between two audible clicks, across all instances.
pub const MIN_CLICK_GAP: Duration = Duration::from_millis(80);

/// Default peak click amplitude.
pub const DEFAULT_CLICK_VOLUME: f32 = 0.035;

/// Channel sender for click requests (payload: peak amplitude).
/// Bounded to keep a burst of reveals from growing without limit.
static CLICK_TX: OnceLock<mpsc::SyncSender<f32>> = OnceLock::new();

/// Unlock state machine, shared by all requesters.
static UNLOCK: Mutex<UnlockState> = Mutex::new(UnlockState::Uninitialized);

/// Global rate limiter, shared by all requesters.
static LIMITER: Mutex<RateLimiter> = Mutex::new(RateLimiter::new());

/// Lifecycle of the shared audio output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockState {
    /// No output constructed yet.
    Uninitialized,
    /// Output constructed; clicks are silently dropped until unlocked.
    Suspended,
    /// Unlocked by a user interaction; permanent for the process.
    Running,
}

/// Transition for "a click was requested": constructs the output on
/// first need but never unlocks. Returns the new state and whether the
/// audio thread must be started.
fn on_first_need(state: UnlockState) -> (UnlockState, bool) {
    match state {
        UnlockState::Uninitialized => (UnlockState::Suspended, true),
        other => (other, false),
    }
}

/// Transition for "the user interacted": resumes a suspended output,
/// constructing it first if it never existed. Running is absorbing.
fn on_interaction(state: UnlockState) -> (UnlockState, bool) {
    match state {
        UnlockState::Uninitialized => (UnlockState::Running, true),
        UnlockState::Suspended => (UnlockState::Running, false),
        UnlockState::Running => (UnlockState::Running, false),
    }
}

/// Global click rate limiter.
///
/// The check and the timestamp update happen in one call under one lock
/// acquisition, so two reveals on the same tick cannot both pass.
#[derive(Debug)]
struct RateLimiter {
    last: Option<Instant>,
}

impl RateLimiter {
    const fn new() -> Self {
        Self { last: None }
    }

    /// Returns true (and records `now`) if a click may play.
    fn allow(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last {
            if now.saturating_duration_since(last) < MIN_CLICK_GAP {
                return false;
            }
        }
        self.last = Some(now);
        true
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Marks the first user interaction: unlocks (and lazily constructs)
/// the shared output. Idempotent; call it on every input event.
pub fn unlock() {
    let start_thread = {
        let mut state = lock(&UNLOCK);
        let (next, start) = on_interaction(*state);
        *state = next;
        start
    };
    if start_thread {
        init_audio_thread();
    }
}

/// Requests one keystroke click at the given peak amplitude.
///
/// Silently does nothing when the output is locked or absent, or when
/// the last click played less than [`MIN_CLICK_GAP`] ago.
pub fn request_click(volume: f32) {
    let (running, start_thread) = {
        let mut state = lock(&UNLOCK);
        let (next, start) = on_first_need(*state);
        *state = next;
        (next == UnlockState::Running, start)
    };
    if start_thread {
        init_audio_thread();
    }
    if !running {
        return;
    }

    if !lock(&LIMITER).allow(Instant::now()) {
        tracing::trace!("click suppressed by rate limit");
        return;
    }

    if let Some(tx) = CLICK_TX.get() {
        if tx.try_send(volume).is_err() {
            tracing::trace!("click dropped: audio channel full");
        }
    }
}

/// Current unlock state, for diagnostics.
pub fn state() -> UnlockState {
    *lock(&UNLOCK)
}

/// Spawns the dedicated audio thread that owns the output stream.
/// First caller wins; subsequent calls are no-ops.
fn init_audio_thread() {
    let (tx, rx) = mpsc::sync_channel::<f32>(16);
    if CLICK_TX.set(tx).is_err() {
        return;
    }

    let spawned = thread::Builder::new()
        .name("foyer-audio".to_string())
        .spawn(move || {
            let output = try_open_output();
            if output.is_none() {
                tracing::debug!("no audio output; clicks degrade to silence");
            }

            while let Ok(volume) = rx.recv() {
                if let Some(stream) = &output {
                    let samples = synthesize_click(volume);
                    stream
                        .mixer()
                        .add(SamplesBuffer::new(1, SAMPLE_RATE, samples));
                }
            }
        });

    if let Err(err) = spawned {
        tracing::warn!("failed to spawn audio thread: {err}");
    }
}

/// Try to open the default audio output, suppressing ALSA errors.
///
/// On Linux, ALSA prints directly to stderr when no audio hardware is
/// available, which would corrupt the TUI on headless systems. Stderr
/// is pointed at /dev/null for the duration of the probe.
#[cfg(target_os = "linux")]
fn try_open_output() -> Option<OutputStream> {
    let silencer = StderrSilencer::activate();
    let result = rodio::OutputStreamBuilder::open_default_stream();
    drop(silencer);

    match result {
        Ok(stream) => Some(stream),
        Err(err) => {
            tracing::debug!("failed to initialize audio output: {err}");
            None
        }
    }
}

/// Try to open the default audio output (non-Linux platforms).
#[cfg(not(target_os = "linux"))]
fn try_open_output() -> Option<OutputStream> {
    match rodio::OutputStreamBuilder::open_default_stream() {
        Ok(stream) => Some(stream),
        Err(err) => {
            tracing::debug!("failed to initialize audio output: {err}");
            None
        }
    }
}

/// Temporarily redirects stderr to /dev/null, restoring it on drop.
///
/// If any step of the redirect fails the silencer deactivates itself
/// and stderr is left untouched.
#[cfg(target_os = "linux")]
struct StderrSilencer {
    saved_fd: Option<i32>,
}

#[cfg(target_os = "linux")]
impl StderrSilencer {
    fn activate() -> Self {
        use std::os::unix::io::AsRawFd;

        let Ok(dev_null) = std::fs::OpenOptions::new().write(true).open("/dev/null") else {
            return Self { saved_fd: None };
        };

        // SAFETY: dup/dup2 are called with valid file descriptors; the
        // duplicate of fd 2 is restored and closed in drop.
        unsafe {
            let saved = libc::dup(2);
            if saved == -1 {
                return Self { saved_fd: None };
            }
            if libc::dup2(dev_null.as_raw_fd(), 2) == -1 {
                libc::close(saved);
                return Self { saved_fd: None };
            }
            Self {
                saved_fd: Some(saved),
            }
        }
    }
}

#[cfg(target_os = "linux")]
impl Drop for StderrSilencer {
    fn drop(&mut self) {
        if let Some(saved) = self.saved_fd.take() {
            // SAFETY: saved is the dup of the original stderr created in
            // activate and is closed exactly once here.
            unsafe {
                libc::dup2(saved, 2);
                libc::close(saved);
            }
        }
    }
}

/// Synthesizes one click at the given peak amplitude.
///
/// A 20 ms white-noise burst with a linear fade is high-pass filtered at
/// 1.8 kHz, then shaped by an exponential envelope: 2 ms attack from
/// near-silence to `volume`, decay back down by the end of the burst,
/// and 10 ms of silent tail room.
fn synthesize_click(volume: f32) -> Vec<f32> {
    use rand::Rng;

    let total = samples_for(CLICK_LEN);
    let burst = samples_for(BURST_LEN);

    // Noise burst with a linear fade across its length.
    let mut rng = rand::rng();
    let mut data: Vec<f32> = (0..burst)
        .map(|i| rng.random_range(-1.0f32..1.0) * (1.0 - i as f32 / burst as f32))
        .collect();

    // One-pole high-pass at the cutoff.
    let dt = 1.0 / SAMPLE_RATE as f32;
    let rc = 1.0 / (2.0 * std::f32::consts::PI * HIGHPASS_HZ);
    let alpha = rc / (rc + dt);
    let mut prev_in = 0.0;
    let mut prev_out = 0.0;
    for sample in &mut data {
        let x = *sample;
        prev_out = alpha * (prev_out + x - prev_in);
        prev_in = x;
        *sample = prev_out;
    }

    // Normalize the filtered burst so the envelope controls the peak.
    let max = data.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    if max > 0.0 {
        for sample in &mut data {
            *sample /= max;
        }
    }

    // Exponential attack/decay envelope.
    let peak = volume.max(ENVELOPE_FLOOR);
    let attack = samples_for(ATTACK).max(1);
    let decay = burst.saturating_sub(attack).max(1);
    for (i, sample) in data.iter_mut().enumerate() {
        let gain = if i < attack {
            let t = i as f32 / attack as f32;
            ENVELOPE_FLOOR * (peak / ENVELOPE_FLOOR).powf(t)
        } else {
            let t = (i - attack) as f32 / decay as f32;
            peak * (ENVELOPE_FLOOR / peak).powf(t)
        };
        *sample *= gain;
    }

    data.resize(total, 0.0);
    data
}

fn samples_for(len: Duration) -> usize {
    (SAMPLE_RATE as u128 * len.as_millis() / 1000) as usize
}
