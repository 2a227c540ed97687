//! Pattern scores for Crab Puzzle evaluation
//!
//! These constants define the scoring weights of both evaluator tiers.

/// Normal tier weights
pub struct NormalScore;

impl NormalScore {
    /// Four in a window - win or loss
    pub const WIN: i32 = 1_000;
    /// Three own pieces and one empty cell in a window
    pub const THREE: i32 = 10;
}

/// Hard tier weights
pub struct HardScore;

impl HardScore {
    /// Four in a window - win or loss
    pub const WIN: i32 = 10_000;
    /// Three own pieces and one empty cell
    pub const THREE: i32 = 100;
    /// Two own pieces and two empty cells
    pub const TWO: i32 = 10;
    /// Per own piece in the central 2x2 region
    pub const CENTER: i32 = 5;
    /// Per movable piece more than the opponent
    pub const MOBILITY: i32 = 2;
}

/// Central 2x2 region: rows 2-3, columns 2-3
pub const CENTER_MASK: u64 = (1u64 << 14) | (1u64 << 15) | (1u64 << 20) | (1u64 << 21);

/// Score of a single window for the hard tier, from one side's view.
///
/// `own` and `empty` are the counts of the side's pieces and empty cells in
/// the window.
#[inline]
pub fn hard_window_score(own: u32, empty: u32) -> i32 {
    match (own, empty) {
        (3, 1) => HardScore::THREE,
        (2, 2) => HardScore::TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Bitboard, Pos};

    #[test]
    fn test_score_hierarchy() {
        assert!(HardScore::WIN > HardScore::THREE * 36);
        assert!(HardScore::THREE > HardScore::TWO);
        assert!(HardScore::TWO > HardScore::CENTER);
        assert!(NormalScore::WIN > NormalScore::THREE * 36);
    }

    #[test]
    fn test_center_mask_cells() {
        let cells: Vec<_> = Bitboard::from_bits(CENTER_MASK).iter_ones().collect();
        assert_eq!(
            cells,
            vec![Pos::new(2, 2), Pos::new(2, 3), Pos::new(3, 2), Pos::new(3, 3)]
        );
    }

    #[test]
    fn test_hard_window_score() {
        assert_eq!(hard_window_score(3, 1), HardScore::THREE);
        assert_eq!(hard_window_score(2, 2), HardScore::TWO);
        // Blocked windows earn nothing
        assert_eq!(hard_window_score(3, 0), 0);
        assert_eq!(hard_window_score(2, 1), 0);
        assert_eq!(hard_window_score(1, 3), 0);
    }
}
