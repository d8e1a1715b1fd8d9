//! Tic-tac-toe board rendering.

use crate::config::Theme;
use gridlock_core::{CellView, GameView, Mark, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Screen rectangle of each cell, in index order.
pub type CellAreas = [Rect; 9];

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;

/// Renders the board centered in `area`.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, theme: &Theme) -> CellAreas {
    let board_area = center_rect(area, CELL_WIDTH * 3 + GAP * 2, CELL_HEIGHT * 3 + GAP * 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(GAP),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(GAP),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(GAP),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(GAP),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            render_cell(f, cell_area, &view.cells[index], theme);
            areas[index] = cell_area;
        }
    }
    areas
}

fn render_cell(f: &mut Frame, area: Rect, cell: &CellView, theme: &Theme) {
    let (text, mut style) = match cell.square {
        Square::Empty if cell.disabled => (String::new(), Style::default()),
        Square::Empty => (
            format!("{}", cell.position.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(mark, theme))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if cell.winning {
        style = style.fg(theme.highlight).add_modifier(Modifier::UNDERLINED);
    }
    if cell.focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let border_style = if cell.winning || cell.focused {
        Style::default().fg(theme.highlight)
    } else if cell.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(paragraph, area);
}

fn mark_color(mark: Mark, theme: &Theme) -> Color {
    match mark {
        Mark::X => theme.x,
        Mark::O => theme.o,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
