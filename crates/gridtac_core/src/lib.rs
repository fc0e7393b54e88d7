//! Pure game logic for tic-tac-toe on an N×N board.
//!
//! # Architecture
//!
//! - **Board**: per-cell occupancy for two players at dimension N
//! - **Rules**: win detection over rows, columns and the two main diagonals
//! - **Cursor**: bounded keyboard navigation over the grid
//! - **Game**: turn/move application and the query interface the UI reads
//!
//! # Example
//!
//! ```
//! use gridtac_core::{Command, Game, Player};
//!
//! let mut game = Game::new(3)?;
//! for index in [0, 1, 3, 4, 6] {
//!     game.place(index)?;
//! }
//! assert!(game.game_over());
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! game.apply(Command::NewGame)?;
//! assert!(!game.game_over());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod command;
mod cursor;
mod error;
mod game;
mod keys;
pub mod rules;
mod types;

pub use board::Board;
pub use command::{Command, split_sequences};
pub use cursor::{Cursor, Direction};
pub use error::{DimensionError, MoveError};
pub use game::{Game, Outcome, Placement};
pub use keys::KeyBindings;
pub use rules::Line;
pub use types::{GameStatus, Player, Square};
