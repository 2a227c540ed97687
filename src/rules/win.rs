//! Win condition checking
//!
//! A player wins with four own pieces in one contiguous run of a row or a
//! column. Diagonals never count.

use crate::board::{Bitboard, Board, Player, Pos, BOARD_SIZE};

/// Cells in a winning run
pub const WINDOW_LEN: usize = 4;

/// Number of length-4 windows: 3 per row and 3 per column
pub const WINDOW_COUNT: usize = 2 * BOARD_SIZE * (BOARD_SIZE - WINDOW_LEN + 1);

/// Build the window masks in scan order: for each index `i`, for each start
/// `j`, the row window (row i from column j) then the column window
/// (column i from row j).
const fn build_windows() -> [u64; WINDOW_COUNT] {
    let mut out = [0u64; WINDOW_COUNT];
    let mut n = 0;
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j + WINDOW_LEN <= BOARD_SIZE {
            let mut row_mask = 0u64;
            let mut col_mask = 0u64;
            let mut k = 0;
            while k < WINDOW_LEN {
                row_mask |= 1u64 << (i * BOARD_SIZE + j + k);
                col_mask |= 1u64 << ((j + k) * BOARD_SIZE + i);
                k += 1;
            }
            out[n] = row_mask;
            out[n + 1] = col_mask;
            n += 2;
            j += 1;
        }
        i += 1;
    }
    out
}

/// Every horizontal and vertical window as a cell mask
pub const WINDOWS: [u64; WINDOW_COUNT] = build_windows();

/// True if `player` owns all four cells of some window
#[inline]
pub fn is_win_for(board: &Board, player: Player) -> bool {
    let pieces = board.pieces(player);
    WINDOWS.iter().any(|&mask| pieces.covers(mask))
}

/// Check for a winner.
///
/// Returns the owner of the first complete window in scan order.
/// Only one side moves per turn, so at most one new line can appear
/// between checks.
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Find the winner and the four cells of its line
pub fn winning_line(board: &Board) -> Option<(Player, [Pos; WINDOW_LEN])> {
    let a = board.pieces(Player::A);
    let b = board.pieces(Player::B);
    for &mask in &WINDOWS {
        let owner = if a.covers(mask) {
            Player::A
        } else if b.covers(mask) {
            Player::B
        } else {
            continue;
        };
        let mut line = [Pos::new(0, 0); WINDOW_LEN];
        for (slot, pos) in line.iter_mut().zip(Bitboard::from_bits(mask).iter_ones()) {
            *slot = pos;
        }
        return Some((owner, line));
    }
    None
}
