//! UI rendering using ratatui.

mod board;

use crate::config::Theme;
use gridlock_core::GameView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use board::render_board;
pub use board::CellAreas;

const HELP: &str = "Navigate with arrow keys. Press Enter or Space to place a mark.";

/// Draws one frame and returns where each cell landed on screen.
pub fn draw(f: &mut Frame, view: &GameView, theme: &Theme, show_help: bool) -> CellAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(if show_help { 3 } else { 0 }),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let indicator = if view.outcome.is_terminal() {
        "Game over".to_string()
    } else {
        view.player_indicator()
    };
    let status = Paragraph::new(view.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(indicator)
                .title_bottom("R: Restart"),
        );
    f.render_widget(status, chunks[1]);

    let cells = render_board(f, chunks[2], view, theme);

    if show_help {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title_bottom("1-9: pick a cell | Q: Quit"),
            );
        f.render_widget(help, chunks[3]);
    }

    cells
}
