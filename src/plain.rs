//! Line-oriented play for piped input.
//!
//! Raw bytes are decoded with the same bindings as the interactive loop,
//! and the board is printed as text after every command.

use crate::config::GameConfig;
use crate::tui::App;
use anyhow::{Context, Result};
use gridtac_core::{Command, Game};
use std::io::{self, Read, Write};
use tracing::{debug, info, instrument};

/// Plays from standard input to standard output until quit or end of input.
#[instrument(skip_all, fields(dimension = *config.dimension()))]
pub fn run_plain_game(config: &GameConfig) -> Result<()> {
    let game = Game::new(*config.dimension())?;
    let mut app = App::new(game, *config.keys());
    run_plain(&mut app, io::stdin().lock(), io::stdout().lock())?;

    info!(turn = app.game().turn(), "Session ended");
    Ok(())
}

/// Decodes `input` into commands and applies them in order.
///
/// The starting position is written first, then one frame per decoded
/// command. Stops after a quit command; unrecognised bytes are skipped.
pub fn run_plain<R: Read, W: Write>(app: &mut App, mut input: R, mut output: W) -> Result<()> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("Failed to read input")?;
    debug!(len = bytes.len(), "Read input");

    write_frame(&mut output, app)?;
    let keys = *app.keys();
    for command in Command::decode_all(&bytes, &keys) {
        if app.handle_command(command).is_break() {
            info!("User quit");
            break;
        }
        write_frame(&mut output, app)?;
    }
    output.flush()?;
    Ok(())
}

fn write_frame<W: Write>(output: &mut W, app: &App) -> Result<()> {
    let game = app.game();
    writeln!(output, "{}", game.board())?;
    if let Some((row, col)) = game.board().coords(game.cursor()) {
        writeln!(output, "Cursor: row {}, column {}", row + 1, col + 1)?;
    }
    writeln!(output, "{}", app.status_message())?;
    writeln!(output)?;
    Ok(())
}
