//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are kept apart from
//! board storage so they can run over any occupancy predicate.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, completed_line, has_line, winning_line};
