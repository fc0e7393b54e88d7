//! Error types for board construction and move validation.

use derive_more::{Display, Error};

/// A placement that the game refused.
///
/// The game state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a marker.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// Rejected cell index.
        index: usize,
    },
    /// The target index is not on the board.
    #[display("cell {index} is outside the board (0..{units})")]
    OutOfRange {
        /// Rejected cell index.
        index: usize,
        /// Number of cells on the board.
        units: usize,
    },
    /// The game already has a result.
    #[display("game is already over")]
    GameOver,
}

/// Board dimension that cannot hold a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("board dimension must be at least 1, got {dimension}")]
pub struct DimensionError {
    /// Requested dimension.
    pub dimension: usize,
}
