//! N×N board storage.

use crate::error::{DimensionError, MoveError};
use crate::types::{Player, Square};
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::instrument;

/// N×N board with squares in row-major order.
///
/// A cell at `(row, col)` lives at flat index `row * N + col`. Each square
/// holds at most one marker, and a marked square is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    dimension: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] when `dimension` is zero.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, DimensionError> {
        if dimension == 0 {
            return Err(DimensionError { dimension });
        }
        Ok(Self {
            dimension,
            squares: vec![Square::Empty; dimension * dimension],
        })
    }

    /// Side length N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells, N².
    pub fn units(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns the player occupying `index`, or `None` for an empty or
    /// off-board index.
    pub fn occupant_at(&self, index: usize) -> Option<Player> {
        self.get(index).and_then(Square::occupant)
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Marks `index` for `player`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index` is not below [`Board::units`]
    /// - [`MoveError::Occupied`] if either player already marked `index`
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let units = self.units();
        let square = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfRange { index, units })?;
        if *square != Square::Empty {
            return Err(MoveError::Occupied { index });
        }
        *square = Square::Occupied(player);
        Ok(())
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Copies the current squares out for rendering.
    pub fn snapshot(&self) -> Vec<Square> {
        self.squares.clone()
    }

    /// Checks if every square holds a marker.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empties every square, keeping the dimension.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Converts a flat index to zero-based `(row, col)`.
    pub fn coords(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.units()).then(|| (index / self.dimension, index % self.dimension))
    }

    /// Occupancy set of `player` as a membership predicate over cell indices.
    pub fn occupancy(&self, player: Player) -> impl Fn(usize) -> bool + '_ {
        move |index| self.squares.get(index).is_some_and(|s| s.is_occupied_by(player))
    }
}

impl<'de> Deserialize<'de> for Board {
    /// Goes through [`Board::new`], so a stored board is held to the same
    /// invariants as a fresh one.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawBoard {
            dimension: usize,
            squares: Vec<Square>,
        }

        let raw = RawBoard::deserialize(deserializer)?;
        let mut board = Board::new(raw.dimension).map_err(de::Error::custom)?;
        if raw.squares.len() != board.units() {
            return Err(de::Error::custom(format!(
                "board of dimension {} needs {} squares, got {}",
                raw.dimension,
                board.units(),
                raw.squares.len()
            )));
        }
        board.squares = raw.squares;
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = vec!["---"; self.dimension].join("+");
        for (row, cells) in self.squares.chunks(self.dimension).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let line = cells
                .iter()
                .map(|square| format!(" {square} "))
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
