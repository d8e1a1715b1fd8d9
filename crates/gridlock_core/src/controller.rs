//! Intent channel between a renderer and the game.
//!
//! A renderer turns raw input into [`Intent`]s and feeds them to
//! [`GameController::dispatch`] one at a time, then redraws from
//! [`GameController::view`]. The engine and the navigator never talk to each
//! other; this is the only place that reads the cursor to drive a selection.

use crate::engine::{BoardEngine, Selection};
use crate::focus::{Direction, FocusNavigator};
use crate::view::GameView;
use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user intent forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Select a specific cell (mouse click, digit key).
    Select(Position),
    /// Select the focused cell (Enter/Space).
    Activate,
    /// Move keyboard focus.
    Move(Direction),
    /// Start a new game.
    Restart,
}

/// Whether an intent changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dispatch {
    /// State changed.
    Accepted,
    /// Precondition not met; state untouched.
    Ignored,
}

/// Owns one game and its focus cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameController {
    engine: BoardEngine,
    focus: FocusNavigator,
}

impl GameController {
    /// Fresh game, X to move, focus on cell 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one intent.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        let result = match intent {
            Intent::Select(pos) => Self::select(&mut self.engine, pos),
            Intent::Activate => Self::select(&mut self.engine, self.focus.current()),
            Intent::Move(direction) => {
                self.focus.move_focus(direction);
                Dispatch::Accepted
            }
            Intent::Restart => {
                self.engine.restart();
                self.focus.reset();
                Dispatch::Accepted
            }
        };
        debug!(?result, outcome = %self.engine.outcome(), "Intent dispatched");
        result
    }

    fn select(engine: &mut BoardEngine, pos: Position) -> Dispatch {
        match engine.select_cell(pos) {
            Selection::Placed(_) => Dispatch::Accepted,
            _ => Dispatch::Ignored,
        }
    }

    /// The board engine.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// The focus navigator.
    pub fn focus(&self) -> &FocusNavigator {
        &self.focus
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::capture(&self.engine, &self.focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};

    #[test]
    fn test_activate_selects_focused_cell() {
        let mut controller = GameController::new();
        controller.dispatch(Intent::Move(Direction::Down));
        controller.dispatch(Intent::Move(Direction::Right));
        assert_eq!(controller.dispatch(Intent::Activate), Dispatch::Accepted);
        assert_eq!(
            controller.engine().board().get(Position::Center),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_activate_on_occupied_focus_is_ignored() {
        let mut controller = GameController::new();
        controller.dispatch(Intent::Activate);
        assert_eq!(controller.dispatch(Intent::Activate), Dispatch::Ignored);
        assert_eq!(controller.engine().current_player(), Mark::O);
    }

    #[test]
    fn test_focus_survives_selection() {
        let mut controller = GameController::new();
        controller.dispatch(Intent::Move(Direction::Left));
        controller.dispatch(Intent::Select(Position::Center));
        assert_eq!(controller.focus().current(), Position::TopRight);
    }
}
