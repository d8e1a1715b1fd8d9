//! Board engine: board state, turn order and outcome.

use crate::rules::{self, Outcome};
use crate::{Board, Mark, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What happened to a select intent.
///
/// Only [`Selection::Placed`] changes state. The other variants describe why
/// the intent was dropped; they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// The mark was written.
    Placed(Mark),
    /// The cell already holds a mark.
    Occupied,
    /// The game has already been won or drawn.
    GameOver,
    /// The raw index was outside 0-8.
    OutOfRange,
}

impl Selection {
    /// True when the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Selection::Placed(_))
    }
}

/// Owns the board and whose turn it is.
///
/// X always moves first, so `count(X)` is `count(O)` or `count(O) + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEngine")]
pub struct BoardEngine {
    board: Board,
    to_move: Mark,
}

/// Unchecked wire form of [`BoardEngine`].
#[derive(Deserialize)]
struct RawEngine {
    board: Board,
    to_move: Mark,
}

/// A deserialized engine that alternating play from X could not reach.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unreachable engine state: X={} O={} with {} to move", x, o, to_move)]
pub struct InvalidEngine {
    /// Number of X marks.
    pub x: usize,
    /// Number of O marks.
    pub o: usize,
    /// Claimed mark to move.
    pub to_move: Mark,
}

impl TryFrom<RawEngine> for BoardEngine {
    type Error = InvalidEngine;

    fn try_from(raw: RawEngine) -> Result<Self, Self::Error> {
        let (x, o) = (raw.board.count(Mark::X), raw.board.count(Mark::O));
        let expected = if x == o {
            Some(Mark::X)
        } else if x == o + 1 {
            Some(Mark::O)
        } else {
            None
        };
        if expected != Some(raw.to_move) {
            return Err(InvalidEngine {
                x,
                o,
                to_move: raw.to_move,
            });
        }
        Ok(Self {
            board: raw.board,
            to_move: raw.to_move,
        })
    }
}

impl BoardEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Places the current mark at `pos`.
    ///
    /// Selecting an occupied cell, or any cell once the game is over, leaves
    /// the engine untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn select_cell(&mut self, pos: Position) -> Selection {
        if self.outcome().is_terminal() {
            debug!("Game is over, ignoring selection");
            return Selection::GameOver;
        }
        if !self.board.is_empty(pos) {
            debug!("Square occupied, ignoring selection");
            return Selection::Occupied;
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.to_move = mark.opponent();
        debug!(outcome = %self.outcome(), "Mark placed");
        Selection::Placed(mark)
    }

    /// Raw-index variant of [`select_cell`](Self::select_cell).
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> Selection {
        match Position::from_index(index) {
            Some(pos) => self.select_cell(pos),
            None => {
                debug!("Index out of range, ignoring selection");
                Selection::OutOfRange
            }
        }
    }

    /// Clears the board and gives X the first move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Mark for the next move. Stale once the outcome is terminal.
    pub fn current_player(&self) -> Mark {
        self.to_move
    }

    /// Read-only board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_flips_after_placement() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.select_cell(Position::Center), Selection::Placed(Mark::X));
        assert_eq!(engine.current_player(), Mark::O);
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_occupied_is_ignored() {
        let mut engine = BoardEngine::new();
        engine.select_cell(Position::Center);
        let before = engine.clone();
        assert_eq!(engine.select_cell(Position::Center), Selection::Occupied);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.select_index(9), Selection::OutOfRange);
        assert_eq!(engine, BoardEngine::new());
        assert!(engine.select_index(8).is_placed());
    }
}
