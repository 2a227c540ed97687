//! Legal move generation
//!
//! A piece may move in a direction when the adjacent cell that way is on the
//! board and empty. How far it then travels is decided by the slide rule in
//! [`Board::slide_destination`].

use crate::board::{Board, Direction, DirectionSet, Move, Player, Pos};

/// A movable piece and the directions it may slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareMoves {
    pub pos: Pos,
    pub directions: DirectionSet,
}

impl SquareMoves {
    /// Candidate moves for this piece in declared direction order
    pub fn moves(self) -> impl Iterator<Item = Move> {
        self.directions.iter().map(move |dir| Move::new(self.pos, dir))
    }
}

/// Directions in which the piece at `pos` can take at least one step.
/// Does not look at who owns the piece.
pub fn available_moves_for_piece(board: &Board, pos: Pos) -> DirectionSet {
    Direction::ALL
        .into_iter()
        .filter(|&dir| board.can_step(pos, dir))
        .collect()
}

/// Every piece of `player` with at least one legal direction, row-major.
pub fn available_squares(board: &Board, player: Player) -> Vec<SquareMoves> {
    board
        .pieces(player)
        .iter_ones()
        .filter_map(|pos| {
            let directions = available_moves_for_piece(board, pos);
            (!directions.is_empty()).then_some(SquareMoves { pos, directions })
        })
        .collect()
}

/// Flattened candidate moves: pieces row-major, then directions in declared order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(24);
    for square in available_squares(board, player) {
        moves.extend(square.moves());
    }
    moves
}

/// Number of movable pieces. No allocation.
pub fn mobility(board: &Board, player: Player) -> i32 {
    board
        .pieces(player)
        .iter_ones()
        .filter(|&pos| Direction::ALL.into_iter().any(|dir| board.can_step(pos, dir)))
        .count() as i32
}

/// True if `player` has any legal move
#[inline]
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .pieces(player)
        .iter_ones()
        .any(|pos| Direction::ALL.into_iter().any(|dir| board.can_step(pos, dir)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, PIECES_PER_PLAYER};

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn test_corner_piece_directions() {
        let b = Board::initial();
        // (0,0): up/left off board, right empty, down empty
        let dirs = available_moves_for_piece(&b, Pos::new(0, 0));
        let got: Vec<_> = dirs.iter().collect();
        assert_eq!(got, vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn test_blocked_by_neighbour() {
        let b = Board::initial();
        // (0,2) B: left (0,1) empty, right (0,3) A, down (1,2) empty
        let dirs = available_moves_for_piece(&b, Pos::new(0, 2));
        assert!(dirs.contains(Direction::Left));
        assert!(dirs.contains(Direction::Down));
        assert!(!dirs.contains(Direction::Right));
        assert!(!dirs.contains(Direction::Up));
    }

    #[test]
    fn test_available_squares_row_major() {
        let b = Board::initial();
        let squares = available_squares(&b, Player::A);
        let positions: Vec<_> = squares.iter().map(|s| s.pos).collect();
        assert_eq!(
            positions,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 3),
                Pos::new(2, 5),
                Pos::new(3, 0),
                Pos::new(5, 2),
                Pos::new(5, 5),
            ]
        );
        for square in &squares {
            assert_eq!(b.get(square.pos), Cell::Piece(Player::A));
            assert!(!square.directions.is_empty());
        }
    }

    #[test]
    fn test_fully_blocked_piece_is_skipped() {
        let b = board(
            "AB....
             B.....
             ......
             ......
             ......
             .....A",
        );
        let squares = available_squares(&b, Player::A);
        assert_eq!(squares.len(), 1);
        assert_eq!(squares[0].pos, Pos::new(5, 5));
    }

    #[test]
    fn test_player_with_no_moves() {
        let b = board(
            "AB....
             B.....
             ......
             ......
             ......
             ......",
        );
        assert!(available_squares(&b, Player::A).is_empty());
        assert!(legal_moves(&b, Player::A).is_empty());
        assert!(!has_any_move(&b, Player::A));
        assert_eq!(mobility(&b, Player::A), 0);
        assert!(has_any_move(&b, Player::B));
    }

    #[test]
    fn test_legal_moves_flatten_in_order() {
        let b = Board::initial();
        let moves = legal_moves(&b, Player::A);
        let expected: Vec<Move> = available_squares(&b, Player::A)
            .into_iter()
            .flat_map(|s| s.moves())
            .collect();
        assert_eq!(moves, expected);
        assert_eq!(moves[0], Move::new(Pos::new(0, 0), Direction::Down));
        assert_eq!(moves[1], Move::new(Pos::new(0, 0), Direction::Right));
    }

    #[test]
    fn test_mobility_matches_square_count() {
        let b = Board::initial();
        for player in [Player::A, Player::B] {
            assert_eq!(mobility(&b, player), available_squares(&b, player).len() as i32);
        }
    }

    #[test]
    fn test_generated_moves_never_duplicate_piece() {
        // Play a fixed sequence of first-generated moves, alternating sides,
        // and check the moved piece leaves its old cell every time.
        let mut b = Board::initial();
        let mut player = Player::A;
        for _ in 0..40 {
            let Some(&mv) = legal_moves(&b, player).first() else {
                player = player.opponent();
                continue;
            };
            let dest = b.apply_move(mv, player).unwrap();
            assert_ne!(dest, mv.from);
            assert_eq!(b.get(mv.from), Cell::Empty);
            assert_eq!(b.get(dest), Cell::Piece(player));

            let after: Vec<_> = available_squares(&b, player).iter().map(|s| s.pos).collect();
            assert!(!after.contains(&mv.from));

            assert_eq!(b.piece_count(Player::A), PIECES_PER_PLAYER);
            assert_eq!(b.piece_count(Player::B), PIECES_PER_PLAYER);
            player = player.opponent();
        }
    }
}
