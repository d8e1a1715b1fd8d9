//! Keyboard focus cursor.
//!
//! The navigator knows nothing about the board. Focus may rest on occupied
//! cells or on a finished game; whether a select at the cursor is honored is
//! the engine's call.

use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

impl Direction {
    /// The direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Single focused cell over the 3x3 grid.
///
/// Rows and columns wrap independently: left from column 0 lands on column 2
/// of the same row, up from row 0 lands on row 2 of the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusNavigator {
    cursor: Position,
}

impl FocusNavigator {
    /// Creates a navigator focused on cell 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor one step, wrapping within the row or column.
    #[instrument(skip(self), fields(from = self.cursor.index()))]
    pub fn move_focus(&mut self, direction: Direction) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let (row, col) = match direction {
            Direction::Up => (row + 2, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col + 2),
            Direction::Right => (row, col + 1),
        };
        self.cursor = Position::from_row_col(row, col);
        trace!(to = self.cursor.index(), "Focus moved");
    }

    /// Puts the cursor back on cell 0.
    pub fn reset(&mut self) {
        self.cursor = Position::TopLeft;
    }

    /// The focused cell.
    pub fn current(&self) -> Position {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_wraps_within_row() {
        let mut nav = FocusNavigator::new();
        nav.move_focus(Direction::Down);
        nav.move_focus(Direction::Left);
        assert_eq!(nav.current(), Position::MiddleRight);
    }

    #[test]
    fn test_up_wraps_within_column() {
        let mut nav = FocusNavigator::new();
        nav.move_focus(Direction::Right);
        nav.move_focus(Direction::Up);
        assert_eq!(nav.current(), Position::BottomCenter);
    }

    #[test]
    fn test_reset() {
        let mut nav = FocusNavigator::new();
        nav.move_focus(Direction::Down);
        nav.move_focus(Direction::Right);
        nav.reset();
        assert_eq!(nav.current(), Position::TopLeft);
    }
}
