//! Win detection for an N×N board.
//!
//! A player wins by holding every cell of a full row, a full column, the
//! main diagonal or the anti-diagonal. Only those two diagonals count.

use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of N cells that wins the game when one player holds all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Zero-based row.
    Row(usize),
    /// Zero-based column.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Every line on an N×N board: rows, then columns, then the diagonals.
    pub fn all(dimension: usize) -> impl Iterator<Item = Line> {
        (0..dimension)
            .map(Line::Row)
            .chain((0..dimension).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Flat indices covered by this line.
    ///
    /// Columns are walked with stride N; no transposed copy is built.
    pub fn indices(self, dimension: usize) -> impl Iterator<Item = usize> {
        (0..dimension).map(move |i| match self {
            Line::Row(r) => r * dimension + i,
            Line::Column(c) => i * dimension + c,
            Line::MainDiagonal => i * dimension + i,
            Line::AntiDiagonal => i * dimension + (dimension - 1 - i),
        })
    }

    /// Checks whether this line passes through `index`.
    pub fn contains(self, dimension: usize, index: usize) -> bool {
        self.indices(dimension).any(|i| i == index)
    }
}

/// Finds the first line whose every cell satisfies `occupied`.
///
/// `occupied` is one player's occupancy set as a predicate over indices.
pub fn completed_line(dimension: usize, occupied: impl Fn(usize) -> bool) -> Option<Line> {
    Line::all(dimension).find(|line| line.indices(dimension).all(&occupied))
}

/// Checks whether the occupancy set contains a completed line.
pub fn has_line(dimension: usize, occupied: impl Fn(usize) -> bool) -> bool {
    completed_line(dimension, occupied).is_some()
}

/// Returns the line `player` has completed on `board`, if any.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    completed_line(board.dimension(), board.occupancy(player))
}

/// Checks if there is a winner on the board.
///
/// X is evaluated before O. With occupied squares never overwritten, at
/// most one of them can hold a line after any single move.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| winning_line(board, player).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(dimension: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(dimension).unwrap();
        for &(index, player) in marks {
            board.place(index, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_indices_on_four_by_four() {
        let n = 4;
        assert_eq!(Line::Row(1).indices(n).collect::<Vec<_>>(), vec![4, 5, 6, 7]);
        assert_eq!(Line::Column(2).indices(n).collect::<Vec<_>>(), vec![2, 6, 10, 14]);
        assert_eq!(Line::MainDiagonal.indices(n).collect::<Vec<_>>(), vec![0, 5, 10, 15]);
        assert_eq!(Line::AntiDiagonal.indices(n).collect::<Vec<_>>(), vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(Line::all(3).count(), 8);
        assert_eq!(Line::all(5).count(), 12);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board, Player::X), Some(Line::Row(0)));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(3, &[(1, Player::O), (4, Player::O), (7, Player::O)]);
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board, Player::O), Some(Line::Column(1)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(3, &[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(winning_line(&board, Player::O), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(3, &[(0, Player::X), (1, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(3, &[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_single_cell_board() {
        let board = board_with(1, &[(0, Player::O)]);
        assert_eq!(winning_line(&board, Player::O), Some(Line::Row(0)));
        for line in Line::all(1) {
            assert_eq!(line.indices(1).collect::<Vec<_>>(), vec![0]);
        }
    }

    #[test]
    fn test_has_line_over_plain_set() {
        let occupied = [0usize, 6, 12, 18, 24];
        assert!(has_line(5, |i| occupied.contains(&i)));
        assert!(!has_line(5, |i| occupied[..4].contains(&i)));
    }

    #[test]
    fn test_off_diagonals_do_not_count() {
        // 4x4 broken diagonal 1, 6, 11 plus 12 never forms a line
        let board = board_with(
            4,
            &[(1, Player::X), (6, Player::X), (11, Player::X), (12, Player::X)],
        );
        assert_eq!(check_winner(&board), None);
    }
}
