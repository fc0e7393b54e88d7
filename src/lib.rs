//! Gridtac - tic-tac-toe on an N×N board in the terminal.
//!
//! # Architecture
//!
//! - **Core** ([`gridtac_core`]): board, win detection, cursor, turns
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: key decoding, ratatui rendering, raw-mode session guard
//! - **Plain**: text frames for piped, non-terminal input
//!
//! # Example
//!
//! ```no_run
//! use gridtac::{Cli, GameConfig, init_logging, run_game};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::resolve(&Cli::default())?;
//! init_logging(&config)?;
//! run_game(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod plain;
mod tui;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig, MAX_DIMENSION};

// Crate-level exports - Logging
pub use logging::init_logging;

// Crate-level exports - Piped input
pub use plain::{run_plain, run_plain_game};

// Crate-level exports - Terminal UI
pub use tui::{App, TerminalSession, board_lines, dispatch, draw, run, run_game};

// Crate-level exports - Game types
pub use gridtac_core::{
    Board, Command, Cursor, DimensionError, Direction, Game, GameStatus, KeyBindings, Line,
    MoveError, Outcome, Placement, Player, Square,
};
