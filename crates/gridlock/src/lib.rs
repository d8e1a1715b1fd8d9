//! Gridlock - terminal front end for keyboard-accessible tic-tac-toe
//!
//! The game logic lives in [`gridlock_core`]. This crate is the presentation
//! layer: it maps terminal input to [`Intent`](gridlock_core::Intent)s,
//! renders the [`GameView`](gridlock_core::GameView) with ratatui, and wires
//! up configuration and logging.
//!
//! # Architecture
//!
//! - **Input**: key and mouse events to intents
//! - **App**: owns the game controller and the last rendered hit areas
//! - **UI**: stateless rendering of a view snapshot
//! - **Script**: headless play for a fixed list of moves

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod script;
mod tui;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, Theme, TuiConfig};
pub use input::{Action, map_key, map_mouse};
pub use script::run_script;
pub use tui::run_tui;
pub use ui::{CellAreas, draw};
