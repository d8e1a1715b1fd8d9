//! Raw terminal events to game intents.

use crate::ui::CellAreas;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gridlock_core::{Direction, Intent, Position};
use ratatui::layout::Position as ScreenPosition;

/// What the front end should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the game.
    Game(Intent),
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action. Releases and repeats are dropped.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let intent = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Intent::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Intent::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Intent::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Intent::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Activate,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Intent::Select(Position::from_index(index)?)
        }
        _ => return None,
    };
    Some(Action::Game(intent))
}

/// Maps a left click on a rendered cell to a select intent.
pub fn map_mouse(mouse: MouseEvent, cells: &CellAreas) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let point = ScreenPosition::new(mouse.column, mouse.row);
    cells
        .iter()
        .position(|area| area.contains(point))
        .and_then(Position::from_index)
        .map(|pos| Action::Game(Intent::Select(pos)))
}
