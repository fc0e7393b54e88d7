//! Application state and logic.

use crossterm::event::KeyEvent;
use gridtac_core::{Command, Game, GameStatus, KeyBindings, Outcome};
use std::ops::ControlFlow;
use tracing::{debug, info};

use super::input;

/// Application context handed to the input loop.
///
/// Owns the game and everything the UI needs to describe it.
#[derive(Debug)]
pub struct App {
    game: Game,
    keys: KeyBindings,
    status_message: String,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(game: Game, keys: KeyBindings) -> Self {
        let status_message = turn_prompt(&game);
        Self {
            game,
            keys,
            status_message,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the key bindings.
    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Decodes and applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        match input::dispatch(key, &self.keys) {
            Some(command) => self.handle_command(command),
            None => {
                debug!(code = ?key.code, "Unrecognized key");
                ControlFlow::Continue(())
            }
        }
    }

    /// Applies a command and refreshes the status message.
    ///
    /// Breaks only on [`Command::Quit`]. Rejected moves are reported in the
    /// status line and never end the loop.
    pub fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        debug!(%command, "Applying command");
        match self.game.apply(command) {
            Ok(Outcome::Quit) => return ControlFlow::Break(()),
            Ok(Outcome::Placed(placement)) => {
                self.status_message = match placement.status {
                    GameStatus::InProgress => turn_prompt(&self.game),
                    GameStatus::Won(player) => format!(
                        "Player {} wins! Press '{}' for a new game or '{}' to quit.",
                        player,
                        self.keys.new_game(),
                        self.keys.quit()
                    ),
                    GameStatus::Draw => format!(
                        "Game ended in a draw! Press '{}' for a new game or '{}' to quit.",
                        self.keys.new_game(),
                        self.keys.quit()
                    ),
                };
            }
            Ok(Outcome::Reset) => {
                info!("New game started");
                self.status_message = turn_prompt(&self.game);
            }
            Ok(Outcome::CursorMoved { .. } | Outcome::Blocked) => {}
            Err(e) => {
                self.status_message = format!("Invalid move: {}.", e);
            }
        }
        ControlFlow::Continue(())
    }
}

fn turn_prompt(game: &Game) -> String {
    format!("Player {}'s turn (turn {})", game.to_move(), game.turn())
}
