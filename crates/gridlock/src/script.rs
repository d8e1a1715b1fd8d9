//! Headless play for a fixed move list.

use anyhow::Result;
use gridlock_core::{Dispatch, GameController, Intent, Position};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Selects `moves` in order and writes the final board and status to `out`.
///
/// Indices outside 0-8, occupied cells and moves after the game ends are
/// skipped, the same way a disabled cell ignores a click.
#[instrument(skip(out))]
pub fn run_script(moves: &[usize], json: bool, out: &mut impl Write) -> Result<()> {
    let mut game = GameController::new();
    for &index in moves {
        let accepted = Position::from_index(index)
            .map(|pos| game.dispatch(Intent::Select(pos)) == Dispatch::Accepted)
            .unwrap_or(false);
        if !accepted {
            warn!(index, "Move ignored");
        }
    }

    let view = game.view();
    info!(status = %view.status_text(), "Script finished");
    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", game.engine().board().display())?;
        writeln!(out)?;
        writeln!(out, "{}", view.status_text())?;
    }
    Ok(())
}
