//! Heuristic evaluation functions for Crab Puzzle board positions
//!
//! Two tiers share the window scan over every horizontal and vertical run of
//! four cells:
//! - Normal: three-with-a-gap counts only
//! - Hard: threes and twos, center control and mobility

use crate::board::{Board, Player};
use crate::rules::{mobility, win::WINDOW_LEN, WINDOWS};

use super::patterns::{hard_window_score, HardScore, NormalScore, CENTER_MASK};

/// Scoring capability plugged into the search.
pub trait Evaluator {
    /// Score a board from `player`'s point of view; higher is better.
    fn evaluate(&self, board: &Board, player: Player) -> i32;

    /// Magnitude returned for a decided game
    fn win_score(&self) -> i32;
}

/// Normal difficulty evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalEvaluator;

/// Hard difficulty evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct HardEvaluator;

impl Evaluator for NormalEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        evaluate_normal(board, player)
    }

    #[inline]
    fn win_score(&self) -> i32 {
        NormalScore::WIN
    }
}

impl Evaluator for HardEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        evaluate_hard(board, player)
    }

    #[inline]
    fn win_score(&self) -> i32 {
        HardScore::WIN
    }
}

/// Piece counts of one window: (own, opponent, empty)
#[inline]
fn window_counts(board: &Board, player: Player, mask: u64) -> (u32, u32, u32) {
    let own = board.pieces(player).count_in(mask);
    let opp = board.pieces(player.opponent()).count_in(mask);
    (own, opp, WINDOW_LEN as u32 - own - opp)
}

/// Normal tier evaluation.
///
/// Returns `NormalScore::WIN` / `-NormalScore::WIN` as soon as a window is
/// complete, otherwise +10 per window with three own pieces and one empty
/// cell and -10 per such opponent window.
#[must_use]
pub fn evaluate_normal(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for &mask in &WINDOWS {
        let (own, opp, empty) = window_counts(board, player, mask);
        if own == 4 {
            return NormalScore::WIN;
        }
        if opp == 4 {
            return -NormalScore::WIN;
        }
        if own == 3 && empty == 1 {
            score += NormalScore::THREE;
        } else if opp == 3 && empty == 1 {
            score -= NormalScore::THREE;
        }
    }
    score
}

/// Hard tier evaluation.
///
/// Returns `HardScore::WIN` / `-HardScore::WIN` for a decided board.
/// Otherwise sums:
/// - window patterns: own threes and twos minus the opponent's
/// - center control: own pieces in the central 2x2 region
/// - mobility: movable pieces compared with the opponent
#[must_use]
pub fn evaluate_hard(board: &Board, player: Player) -> i32 {
    let opponent = player.opponent();
    let mut pattern_score = 0;

    for &mask in &WINDOWS {
        let (own, opp, empty) = window_counts(board, player, mask);
        if own == 4 {
            return HardScore::WIN;
        }
        if opp == 4 {
            return -HardScore::WIN;
        }
        pattern_score += hard_window_score(own, empty) - hard_window_score(opp, empty);
    }

    let center_score = board.pieces(player).count_in(CENTER_MASK) as i32 * HardScore::CENTER;
    let mobility_score = (mobility(board, player) - mobility(board, opponent)) * HardScore::MOBILITY;

    pattern_score + center_score + mobility_score
}
