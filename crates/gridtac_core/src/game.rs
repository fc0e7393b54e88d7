//! Turn and move application for a single game.
//!
//! [`Game`] owns the board, the cursor and the turn counter. It is the only
//! thing that mutates the board, and every mutation goes through
//! [`Game::apply`] or one of the methods it dispatches to.

use crate::board::Board;
use crate::command::Command;
use crate::cursor::{Cursor, Direction};
use crate::error::{DimensionError, MoveError};
use crate::rules::{self, Line};
use crate::types::{GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A marker that was successfully placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Cell that received the marker.
    pub index: usize,
    /// Player who placed it.
    pub player: Player,
    /// Game status after the placement.
    pub status: GameStatus,
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The cursor moved.
    CursorMoved {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
    },
    /// The cursor was at an edge and stayed put.
    Blocked,
    /// A marker was placed.
    Placed(Placement),
    /// The board was cleared for a new game.
    Reset,
    /// The player asked to leave.
    Quit,
}

/// One tic-tac-toe game on an N×N board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    cursor: Cursor,
    to_move: Player,
    turn: usize,
    status: GameStatus,
    winning_line: Option<Line>,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game with X to move on turn 1.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] when `dimension` is zero.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, DimensionError> {
        let board = Board::new(dimension)?;
        info!(dimension, "New game");
        Ok(Self {
            board,
            cursor: Cursor::new(dimension)?,
            to_move: Player::X,
            turn: 1,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        })
    }

    /// Side length N.
    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    /// Cell states in row-major order, N² long.
    pub fn snapshot(&self) -> Vec<Square> {
        self.board.snapshot()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game has ended in a win or a draw.
    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, or `None` while in progress or after a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Line completed by the winner.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Player whose marker the next placement uses.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// 1-based turn counter; odd turns are X's.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Indices placed so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Applies a decoded command.
    ///
    /// # Errors
    ///
    /// Only [`Command::PlaceMarker`] can fail; see [`Game::place`].
    #[instrument(skip(self), fields(cursor = self.cursor.index(), turn = self.turn))]
    pub fn apply(&mut self, command: Command) -> Result<Outcome, MoveError> {
        match command {
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                let from = self.cursor.index();
                let moved = command.direction().is_some_and(|d| self.move_cursor(d));
                Ok(if moved {
                    Outcome::CursorMoved {
                        from,
                        to: self.cursor.index(),
                    }
                } else {
                    Outcome::Blocked
                })
            }
            Command::PlaceMarker => self.place_at_cursor().map(Outcome::Placed),
            Command::NewGame => {
                self.new_game();
                Ok(Outcome::Reset)
            }
            Command::Quit => {
                info!(turn = self.turn, "Quit requested");
                Ok(Outcome::Quit)
            }
        }
    }

    /// Moves the cursor one cell, returning `false` at an edge.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        self.cursor.step(direction)
    }

    /// Places the current player's marker under the cursor.
    ///
    /// # Errors
    ///
    /// See [`Game::place`].
    pub fn place_at_cursor(&mut self) -> Result<Placement, MoveError> {
        self.place(self.cursor.index())
    }

    /// Places the current player's marker at `index`.
    ///
    /// On success the turn counter advances, the side to move flips and the
    /// status is re-evaluated. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has a result
    /// - [`MoveError::OutOfRange`] for an index off the board
    /// - [`MoveError::Occupied`] for a cell that already holds a marker
    #[instrument(skip(self), fields(player = ?self.to_move, turn = self.turn))]
    pub fn place(&mut self, index: usize) -> Result<Placement, MoveError> {
        if self.game_over() {
            warn!(index, status = ?self.status, "Placement after game end");
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        if let Err(e) = self.board.place(index, player) {
            warn!(index, error = %e, "Placement rejected");
            return Err(e);
        }
        self.history.push(index);
        self.update_status(player);
        self.turn += 1;
        self.to_move = player.opponent();
        debug!(
            coords = ?self.board.coords(index),
            board = %self.board,
            "Board after placement"
        );

        Ok(Placement {
            index,
            player,
            status: self.status,
        })
    }

    /// Clears the board and starts over at the same dimension.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.board.clear();
        self.cursor.reset();
        self.to_move = Player::X;
        self.turn = 1;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.history.clear();
        info!(dimension = self.dimension(), "Board reset");
    }

    /// Updates game status after `player` moved.
    ///
    /// Only the mover can have completed a line.
    fn update_status(&mut self, player: Player) {
        if let Some(line) = rules::winning_line(&self.board, player) {
            info!(%player, ?line, turn = self.turn, "Game won");
            self.winning_line = Some(line);
            self.status = GameStatus::Won(player);
        } else if rules::is_draw(&self.board) {
            info!(turn = self.turn, "Game drawn");
            self.status = GameStatus::Draw;
        }
    }
}
