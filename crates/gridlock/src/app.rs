//! Application state and logic.

use crate::config::Theme;
use crate::input::{self, Action};
use crate::ui::CellAreas;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use gridlock_core::{Dispatch, GameController, GameView};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    theme: Theme,
    show_help: bool,
    cell_areas: CellAreas,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme, show_help: bool) -> Self {
        Self {
            game: GameController::new(),
            theme,
            show_help,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Snapshot to render.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Gets the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the help footer is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Records where the last frame put each cell, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: CellAreas) {
        self.cell_areas = areas;
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) => self.map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            _ => None,
        };
        if let Some(action) = action {
            self.apply(action);
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<Action> {
        input::map_key(key)
    }

    fn map_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        input::map_mouse(mouse, &self.cell_areas)
    }

    /// Applies an already-mapped action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::Game(intent) => {
                if self.game.dispatch(intent) == Dispatch::Ignored {
                    debug!(?intent, "Intent ignored");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use gridlock_core::{Mark, Position, Square};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keyboard_play() {
        let mut app = App::new(Theme::default(), true);
        app.handle_event(key(KeyCode::Right));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(
            app.game().engine().board().get(Position::TopCenter),
            Square::Occupied(Mark::X)
        );
        assert_eq!(app.view().status_text(), "Current Player: O");
    }

    #[test]
    fn test_click_before_first_draw_does_nothing() {
        let mut app = App::new(Theme::default(), true);
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.game(), &GameController::new());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::default(), true);
        assert!(!app.should_quit());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
