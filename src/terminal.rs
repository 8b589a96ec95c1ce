//! Terminal management: raw mode RAII guard, ratatui backend, and panic hook.

use crate::error::DisplayError;
use crossterm::{cursor, queue, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, IsTerminal, Stdout, Write};
use tracing::debug;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// RAII guard that restores terminal state on drop (even on early return).
pub struct TerminalGuard {
    _private: (), // prevent construction outside this module
}

impl TerminalGuard {
    /// Enter alternate screen, raw mode, and hide the cursor. Returns the guard.
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;
        if let Err(e) = terminal::enable_raw_mode() {
            restore();
            return Err(e);
        }
        Ok(TerminalGuard { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        debug!("terminal restored");
    }
}

/// Leave raw mode and the alternate screen. Errors are ignored; this runs on
/// the way out.
pub fn restore() {
    let _ = terminal::disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = queue!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
}

/// Install a custom panic hook that restores the terminal before printing
/// the panic message. Call this once at startup.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}

/// Take over the terminal for full-screen drawing.
///
/// Fails with [`DisplayError::NotATerminal`] when stdout is redirected.
pub fn init() -> Result<(TerminalGuard, Tui), DisplayError> {
    if !io::stdout().is_terminal() {
        return Err(DisplayError::NotATerminal);
    }
    let guard = TerminalGuard::new()?;
    let term = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    debug!("terminal initialized");
    Ok((guard, term))
}
