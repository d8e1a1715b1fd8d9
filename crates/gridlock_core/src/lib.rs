//! Gridlock core - keyboard-accessible tic-tac-toe state machine
//!
//! Two independent slices of state, with no I/O:
//!
//! - **[`BoardEngine`]**: the board, turn order and win/draw evaluation.
//! - **[`FocusNavigator`]**: a keyboard cursor over the same 3x3 grid that
//!   wraps per row and per column.
//!
//! A renderer drives both through [`GameController::dispatch`] and draws from
//! the [`GameView`] snapshot.
//!
//! # Example
//!
//! ```
//! use gridlock_core::{Direction, GameController, Intent, Mark, Outcome};
//!
//! let mut game = GameController::new();
//! game.dispatch(Intent::Activate); // X at 0
//! game.dispatch(Intent::Move(Direction::Down));
//! game.dispatch(Intent::Activate); // O at 3
//! assert_eq!(game.view().status_text(), "Current Player: X");
//! assert_eq!(game.engine().outcome(), Outcome::InProgress);
//! assert_eq!(game.engine().current_player(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod engine;
mod focus;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{Dispatch, GameController, Intent};
pub use engine::{BoardEngine, InvalidEngine, Selection};
pub use focus::{Direction, FocusNavigator};
pub use position::Position;
pub use rules::{Outcome, WinningLine};
pub use types::{Board, Mark, Square};
pub use view::{CellView, GameView};
