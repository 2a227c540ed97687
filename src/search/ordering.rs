//! Move ordering for alpha-beta pruning
//!
//! Ordering never changes the value of a search, only how much of the tree
//! gets cut. Sorts are stable so equal keys keep enumeration order and the
//! chosen move stays reproducible.

use std::cmp::Reverse;

use crate::board::{Board, Move, Player, BOARD_SIZE};
use crate::rules::is_win_for;

/// Bonus for a move that completes four in a row on the spot
pub const IMMEDIATE_WIN_BONUS: i32 = 2_000;

/// Reorders candidate moves before expansion.
pub trait MoveOrdering {
    fn order(&self, board: &Board, mover: Player, moves: &mut [Move]);
}

/// Keep generation order: pieces row-major, directions in declared order
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl MoveOrdering for NaturalOrder {
    #[inline]
    fn order(&self, _board: &Board, _mover: Player, _moves: &mut [Move]) {}
}

/// Pieces closer to the center first, immediate wins before everything
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterFirst;

impl MoveOrdering for CenterFirst {
    fn order(&self, board: &Board, mover: Player, moves: &mut [Move]) {
        moves.sort_by_cached_key(|&mv| Reverse(score_move(board, mv, mover)));
    }
}

/// Cheap ordering key for one move.
///
/// Centrality of the moving piece counted in half cells (2 at a corner,
/// 10 in the central square) plus [`IMMEDIATE_WIN_BONUS`] when the move wins.
pub fn score_move(board: &Board, mv: Move, mover: Player) -> i32 {
    let span = BOARD_SIZE as i32 - 1;
    let row = i32::from(mv.from.row);
    let col = i32::from(mv.from.col);
    let mut score = (BOARD_SIZE as i32 - (2 * row - span).abs())
        + (BOARD_SIZE as i32 - (2 * col - span).abs());

    if is_win_for(&board.with_move(mv, mover), mover) {
        score += IMMEDIATE_WIN_BONUS;
    }
    score
}
