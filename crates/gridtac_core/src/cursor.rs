//! Cursor movement for keyboard navigation.

use crate::error::DimensionError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One row up (index − N).
    Up,
    /// One row down (index + N).
    Down,
    /// One column left (index − 1).
    Left,
    /// One column right (index + 1).
    Right,
}

/// Cursor over the flat cells of an N×N board.
///
/// The index always stays in `0..N²`. Steps that would leave the grid or
/// wrap onto a neighbouring row are absorbed and leave the cursor in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cursor {
    index: usize,
    dimension: usize,
}

impl Cursor {
    /// Creates a cursor at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] when `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self, DimensionError> {
        if dimension == 0 {
            return Err(DimensionError { dimension });
        }
        Ok(Self {
            index: 0,
            dimension,
        })
    }

    /// Current flat index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Zero-based row of the cursor.
    pub fn row(&self) -> usize {
        self.index / self.dimension
    }

    /// Zero-based column of the cursor.
    pub fn col(&self) -> usize {
        self.index % self.dimension
    }

    /// Moves one cell in `direction`.
    ///
    /// Returns `false` and leaves the cursor unchanged at a grid edge.
    #[instrument(skip(self), fields(index = self.index))]
    pub fn step(&mut self, direction: Direction) -> bool {
        let n = self.dimension;
        let units = n * n;
        let target = match direction {
            Direction::Up => self.index.checked_sub(n),
            Direction::Down => Some(self.index + n).filter(|&next| next < units),
            Direction::Left => (self.col() > 0).then(|| self.index - 1),
            Direction::Right => (self.col() + 1 < n).then(|| self.index + 1),
        };
        match target {
            Some(next) => {
                self.index = next;
                true
            }
            None => {
                trace!(?direction, "Cursor at edge");
                false
            }
        }
    }

    /// Returns the cursor to index 0.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
