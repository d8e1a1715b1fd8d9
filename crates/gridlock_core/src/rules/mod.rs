//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here holds state;
//! the outcome of a game is always recomputed from the board alone.

mod draw;
mod outcome;
mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate};
pub use win::{WinningLine, winning_line};
