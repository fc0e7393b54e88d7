//! Raw-mode terminal session.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Once;
use tracing::{debug, info, warn};

/// Guard for raw mode and the alternate screen. Restores the terminal on drop.
///
/// Restoration also runs from a panic hook, so a panic inside the loop
/// does not leave the shell in raw mode.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Switches the terminal to raw mode on the alternate screen.
    pub fn start() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            terminal.hide_cursor()?;
            terminal.clear()?;
            Ok(terminal)
        };

        match setup() {
            Ok(terminal) => {
                info!("Terminal in raw mode");
                Ok(Self { terminal })
            }
            Err(e) => {
                let _ = restore();
                Err(e.into())
            }
        }
    }

    /// Terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

static PANIC_HOOK: Once = Once::new();

/// Chains terminal restoration in front of the current panic hook, once per process.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore();
            previous(info);
        }));
    });
}
