//! Gridtac - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use gridtac::{Cli, GameConfig, init_logging, run_game, run_plain_game};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    init_logging(&config)?;

    info!(
        dimension = *config.dimension(),
        log_file = %config.log_file().display(),
        "Starting gridtac"
    );

    if std::io::stdin().is_tty() {
        run_game(&config)
    } else {
        run_plain_game(&config)
    }
}
