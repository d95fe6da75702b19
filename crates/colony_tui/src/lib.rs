pub mod renderer;
pub mod views;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout, Write};

/// Switches `out` to the alternate screen with mouse capture and a hidden
/// cursor.
pub fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
}

/// Undoes [`enter_screen`].
pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Terminal session held for the lifetime of the value.
///
/// Construction enables raw mode and enters the alternate screen; dropping
/// the guard restores the terminal, also when the app returns early or
/// panics.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        match Self::setup() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e)
            }
        }
    }

    fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        enter_screen(&mut stdout)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(terminal)
    }

    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "Failed to leave raw mode");
    }
    if let Err(e) = leave_screen(&mut io::stdout()) {
        tracing::warn!(error = %e, "Failed to leave alternate screen");
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_enter_screen_sequences() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        assert!(contains(&out, "\x1b[?1049h"));
        assert!(contains(&out, "\x1b[?25l"));
    }

    #[test]
    fn test_leave_screen_undoes_enter() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        assert!(contains(&out, "\x1b[?1049l"));
        assert!(contains(&out, "\x1b[?25h"));
        assert!(!contains(&out, "\x1b[?1049h"));
    }
}
