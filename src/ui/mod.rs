// Terminal UI - the face of tuneshell
// Built with ratatui; the window state lives in `shell`, this layer draws it and feeds it input

mod app;        // application state and event loop
pub mod events; // keyboard/mouse event handling
pub mod render; // layout and drawing of the window

pub use app::{apply_event, App};
pub use events::{AppEvent, EventHandler, KeyContext};
pub use render::ShellLayout;

use crate::error::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::debug;

/// Owns the real terminal for the lifetime of the event loop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    _restore: RestoreGuard,
}

/// Puts the terminal back the way the shell found it. Also runs on error and
/// panic unwinds, so a crash never leaves the user in raw mode.
struct RestoreGuard {
    mouse: bool,
}

impl RestoreGuard {
    fn restore(mouse: bool) {
        let _ = disable_raw_mode();

        let mut stdout = io::stdout();
        if mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        Self::restore(self.mouse);
    }
}

impl TerminalManager {
    /// Enters raw mode and the alternate screen; mouse capture only when asked for.
    pub fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let restore = RestoreGuard { mouse };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        install_panic_restore(mouse);

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        debug!("terminal ready (mouse capture: {})", mouse);

        Ok(Self {
            terminal,
            _restore: restore,
        })
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.terminal.clear();
        let _ = self.terminal.show_cursor();
    }
}

// The panic message would otherwise be printed into the alternate screen and lost
fn install_panic_restore(mouse: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        RestoreGuard::restore(mouse);
        previous(info);
    }));
}
