//! Draw detection for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the game is drawn: the board is full and nobody holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill(board: &mut Board, marks: &[Player]) {
        for (index, &player) in marks.iter().enumerate() {
            board.place(index, player).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        let mut board = Board::new(3).unwrap();
        // X O X / O X X / O X O
        fill(&mut board, &[X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        let mut board = Board::new(2).unwrap();
        fill(&mut board, &[X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
