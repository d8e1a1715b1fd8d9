//! Outcome classification.

use super::win::{WinningLine, winning_line};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal or non-terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, .. } => write!(f, "Winner: {}", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board. A win is checked before a draw, so a full board with
/// a completed line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        Outcome::Win { mark, line }
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
