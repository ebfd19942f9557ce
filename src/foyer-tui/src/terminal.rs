//! Terminal setup, teardown, and panic safety.
//!
//! RAII-based cleanup ensures the terminal is restored to a sane state
//! on every exit path, including panics.

use std::io::{stdout, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Track whether the panic hook has been installed, to install it once.
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// RAII guard over raw mode, the alternate screen, and mouse capture.
///
/// Created by [`setup`]; restores the terminal when dropped.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self { restored: false })
    }

    /// Restore the terminal explicitly (idempotent).
    pub fn restore(&mut self) {
        if !self.restored {
            self.restored = true;
            restore_terminal();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Best-effort terminal restore, usable from the panic hook where no
/// guard is reachable. Errors are ignored: there is nothing better to do
/// with a terminal we failed to restore.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Install a panic hook that restores the terminal before the default
/// hook prints the panic message, so the message lands on a usable
/// screen.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

/// Enter TUI mode: raw terminal, alternate screen, mouse capture, and a
/// panic hook. Returns the ratatui terminal and the restore guard.
pub fn setup() -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    install_panic_hook();
    let guard = TerminalGuard::new()?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok((terminal, guard))
}
