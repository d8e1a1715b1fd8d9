//! Win detection.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 fixed triples that constitute a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// All lines in evaluation order: rows, columns, diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark filling all three cells, if any.
    fn completed_by(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let first = board.get(a);
        match first {
            Square::Occupied(mark) if board.get(b) == first && board.get(c) == first => Some(mark),
            _ => None,
        }
    }
}

/// Finds the first completed line in evaluation order.
///
/// Returns the winning mark together with its line, or `None` when no line
/// is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    WinningLine::ALL
        .iter()
        .find_map(|line| line.completed_by(board).map(|mark| (mark, *line)))
}
