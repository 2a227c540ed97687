//! Board structure with the slide-move primitive

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Direction, Move, Player, Pos, BOARD_SIZE};
use crate::error::EngineError;

/// Starting layout: (row, col, owner)
const INITIAL_LAYOUT: [(u8, u8, Player); 12] = [
    (0, 0, Player::A),
    (0, 2, Player::B),
    (0, 3, Player::A),
    (0, 5, Player::B),
    (2, 0, Player::B),
    (2, 5, Player::A),
    (3, 0, Player::A),
    (3, 5, Player::B),
    (5, 0, Player::B),
    (5, 2, Player::A),
    (5, 3, Player::B),
    (5, 5, Player::A),
];

/// Game board. Small enough to be copied freely, so search branches
/// work on their own value and never alias the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Player A pieces
    a: Bitboard,
    /// Player B pieces
    b: Bitboard,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            a: Bitboard::new(),
            b: Bitboard::new(),
        }
    }

    /// Board with the fixed starting layout, six pieces per side
    pub fn initial() -> Self {
        let mut board = Self::new();
        for (row, col, player) in INITIAL_LAYOUT {
            board.place_piece(Pos::new(row, col), player);
        }
        board
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.a.get(pos) {
            Cell::Piece(Player::A)
        } else if self.b.get(pos) {
            Cell::Piece(Player::B)
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.a.get(pos) && !self.b.get(pos)
    }

    /// Put a piece on an empty cell (setup and tests only; moves use `slide`)
    #[inline]
    pub fn place_piece(&mut self, pos: Pos, player: Player) {
        self.remove_piece(pos);
        self.pieces_mut(player).set(pos);
    }

    /// Remove a piece
    #[inline]
    pub fn remove_piece(&mut self, pos: Pos) {
        self.a.clear(pos);
        self.b.clear(pos);
    }

    /// Bitboard for a player
    #[inline]
    pub fn pieces(&self, player: Player) -> Bitboard {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    #[inline]
    fn pieces_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }

    #[inline]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.pieces(player).count()
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> u32 {
        (BOARD_SIZE * BOARD_SIZE) as u32 - self.a.count() - self.b.count()
    }

    /// True if the cell one step from `pos` in `dir` exists and is empty
    #[inline]
    pub fn can_step(&self, pos: Pos, dir: Direction) -> bool {
        pos.step(dir).is_some_and(|next| self.is_empty(next))
    }

    /// Where a piece at `pos` ends up when slid in `dir`: the last empty cell
    /// before the edge or any occupied cell. Returns `pos` when blocked.
    pub fn slide_destination(&self, pos: Pos, dir: Direction) -> Pos {
        let mut current = pos;
        while let Some(next) = current.step(dir) {
            if !self.is_empty(next) {
                break;
            }
            current = next;
        }
        current
    }

    /// Slide without reporting errors. The search only feeds moves it
    /// generated itself through here. Returns the destination; a start cell
    /// not holding `player`'s piece leaves the board as it was.
    #[inline]
    pub fn slide(&mut self, mv: Move, player: Player) -> Pos {
        if self.get(mv.from) != Cell::Piece(player) {
            return mv.from;
        }
        let dest = self.slide_destination(mv.from, mv.direction);
        if dest != mv.from {
            let pieces = self.pieces_mut(player);
            pieces.clear(mv.from);
            pieces.set(dest);
        }
        dest
    }

    /// Copy of the board with `mv` applied (unchecked)
    #[inline]
    pub fn with_move(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.slide(mv, player);
        next
    }

    /// Validated move application for driver input.
    ///
    /// Fails with `IllegalMove` when `mv.from` does not hold `player`'s piece
    /// or the adjacent cell in `mv.direction` is off-board or occupied.
    /// The board is untouched on failure.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<Pos, EngineError> {
        if self.get(mv.from) != Cell::Piece(player) {
            return Err(EngineError::IllegalMove {
                mv,
                reason: "start cell does not hold the mover's piece",
            });
        }
        if !self.can_step(mv.from, mv.direction) {
            return Err(EngineError::IllegalMove {
                mv,
                reason: "direction is blocked",
            });
        }
        Ok(self.slide(mv, player))
    }
}

impl fmt::Display for Board {
    /// Text grid: `.` empty, `A`/`B` pieces, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let ch = match self.get(Pos::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Piece(Player::A) => 'A',
                    Cell::Piece(Player::B) => 'B',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse the `Display` format. Whitespace inside a row is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidLayout(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::InvalidLayout(format!(
                    "row {} has {} cells",
                    row + 1,
                    cells.len()
                )));
            }
            for (col, ch) in cells.iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    '.' => {}
                    'A' | 'a' | '1' => board.place_piece(pos, Player::A),
                    'B' | 'b' | '2' => board.place_piece(pos, Player::B),
                    other => {
                        return Err(EngineError::InvalidLayout(format!(
                            "unexpected cell '{other}' at {}",
                            pos.label()
                        )))
                    }
                }
            }
        }
        Ok(board)
    }
}
