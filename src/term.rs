//! Terminal mode detection and the raw-mode guard.

use crate::render::Frame;
use crossterm::terminal;
use std::io::{self, IsTerminal, Write};
use tracing::debug;

/// True when an interactive prompt loop can run: both ends of the terminal
/// conversation must be real TTYs, not pipes or files.
pub(crate) fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Scoped ownership of the terminal's raw mode and cursor visibility.
///
/// `acquire` enables raw mode and hides the cursor; dropping the guard shows
/// the cursor and then disables raw mode, on every exit path. Raw mode is a
/// process-wide resource with no reference counting, so at most one guard may
/// be outstanding at a time.
pub(crate) struct RawModeGuard;

impl RawModeGuard {
    pub(crate) fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Raw mode is guard-owned from here; a failed cursor write unwinds
        // through Drop and still restores the terminal.
        let guard = Self;
        hide_cursor(&mut io::stdout())?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Cursor first; disabling raw mode is the last terminal-affecting
        // action before control leaves the prompt.
        let mut frame = Frame::new();
        if frame.show_cursor().is_ok() {
            let _ = frame.commit(&mut io::stdout());
        }
        if terminal::disable_raw_mode().is_err() {
            debug!("failed to disable raw mode on guard drop");
        }
    }
}

fn hide_cursor(out: &mut impl Write) -> io::Result<()> {
    let mut frame = Frame::new();
    frame.hide_cursor()?;
    frame.commit(out)
}
