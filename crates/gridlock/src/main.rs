//! Gridlock - keyboard-accessible tic-tac-toe

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gridlock::{Cli, Command, TuiConfig, run_script, run_tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_tui(TuiConfig::load(config.as_deref())?),
        Command::Script { moves, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
            run_script(&moves, json, &mut std::io::stdout().lock())
        }
    }
}
