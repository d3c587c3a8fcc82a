//! Raw-mode terminal session.

use std::io;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, warn};

use crate::TerminalError;

/// Drop guard that owns the terminal for the duration of a game.
///
/// Entering switches to raw mode, the alternate screen and a hidden
/// cursor. Dropping restores all three, also when the game exits through
/// an error or a panic, so the shell is never left in raw mode.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::SetupFailed)?;
        // From here on, dropping the guard undoes raw mode.
        let session = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide).map_err(TerminalError::SetupFailed)?;
        debug!("terminal session entered");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave the alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
        debug!("terminal session restored");
    }
}
