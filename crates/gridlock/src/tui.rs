//! Interactive terminal session.

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal in raw/alternate-screen mode. Restores it on drop.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, an early return drops the guard and restores.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore_terminal(&mut self.out) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen. Every step runs even if an
/// earlier one fails; the first error is returned.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Runs the TUI until the user quits.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    // Logs go to a file so they don't draw over the board.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting gridlock TUI");
    let theme = config.theme()?;
    let app = App::new(theme, *config.show_help());

    let res = {
        let _guard = TerminalGuard::enter(io::stdout())?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| run_app(&mut terminal, app))
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        let view = app.view();
        let mut areas = [ratatui::layout::Rect::default(); 9];
        terminal.draw(|f| areas = ui::draw(f, &view, app.theme(), app.show_help()))?;
        app.set_cell_areas(areas);

        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_restore_writes_leave_and_show() {
        let mut out = Vec::new();
        restore_terminal(&mut out).expect("restore");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(text.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(text.contains(SHOW_CURSOR));
    }
}
