//! Command-line interface for gridlock.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridlock - keyboard-accessible tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Keyboard-accessible tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file (defaults to gridlock.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play a fixed list of cell indices (0-8) and print the result
    Script {
        /// Cell indices, selected in order; X moves first
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the full view snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { config: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_play() {
        let cli = Cli::parse_from(["gridlock"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Play { config: None });
    }

    #[test]
    fn test_script_args() {
        let cli = Cli::parse_from(["gridlock", "script", "0", "4", "1", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Script {
                moves: vec![0, 4, 1],
                json: true
            })
        );
    }
}
