//! Read-only snapshot for renderers.
//!
//! Everything a renderer needs to draw one frame: each cell with its
//! focus, disabled and winning flags, plus the status line.

use crate::engine::BoardEngine;
use crate::focus::FocusNavigator;
use crate::rules::Outcome;
use crate::{Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// One cell as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Where the cell is.
    pub position: Position,
    /// What it holds.
    pub square: Square,
    /// Keyboard focus is here.
    pub focused: bool,
    /// Selecting it would be ignored.
    pub disabled: bool,
    /// Part of the winning line.
    pub winning: bool,
}

impl CellView {
    /// Accessible label, e.g. `Cell 5, empty` or `Cell 1, X`.
    pub fn label(&self) -> String {
        let number = self.position.index() + 1;
        match self.square {
            Square::Empty => format!("Cell {}, empty", number),
            Square::Occupied(mark) => format!("Cell {}, {}", number, mark),
        }
    }
}

/// Full frame snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in index order.
    pub cells: [CellView; 9],
    /// Game outcome.
    pub outcome: Outcome,
    /// Mark to move next. Stale once `outcome` is terminal.
    pub current_player: Mark,
    /// Focused cell.
    pub focus: Position,
}

impl GameView {
    /// Builds a snapshot from the two state slices.
    pub fn capture(engine: &BoardEngine, focus: &FocusNavigator) -> Self {
        let outcome = engine.outcome();
        let line = outcome.winning_line();
        let board = engine.board();
        let cells = Position::ALL.map(|position| {
            let square = board.get(position);
            CellView {
                position,
                square,
                focused: position == focus.current(),
                disabled: square != Square::Empty || outcome.is_terminal(),
                winning: line.is_some_and(|l| l.contains(position)),
            }
        });
        Self {
            cells,
            outcome,
            current_player: engine.current_player(),
            focus: focus.current(),
        }
    }

    /// Live status line.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::Win { mark, .. } => format!("Winner: {}", mark),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Current Player: {}", self.current_player),
        }
    }

    /// Text for the current-player badge.
    pub fn player_indicator(&self) -> String {
        format!("Current player {}", self.current_player)
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.index()]
    }
}
