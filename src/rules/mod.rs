//! Game rules for Crab Puzzle
//!
//! This module implements the rule set:
//! - Move generation under the slide-until-blocked rule
//! - Win condition (four in a row or column, no diagonals)

pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use movegen::{
    available_moves_for_piece, available_squares, has_any_move, legal_moves, mobility, SquareMoves,
};
pub use win::{is_win_for, winner, winning_line, WINDOWS};
