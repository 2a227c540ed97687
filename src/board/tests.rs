use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::A.opponent(), Player::B);
    assert_eq!(Player::B.opponent(), Player::A);
}

#[test]
fn test_player_ids() {
    assert_eq!(Player::try_from(1), Ok(Player::A));
    assert_eq!(Player::try_from(2), Ok(Player::B));
    for bad in [0u8, 3, 4, 255] {
        assert_eq!(Player::try_from(bad), Err(EngineError::InvalidPlayer(bad)));
    }
    assert_eq!(Player::A.id(), 1);
    assert_eq!(Player::B.id(), 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 15);
    assert_eq!(Pos::from_index(15), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 6));
    assert!(Pos::try_new(5, 5).is_ok());
    assert_eq!(
        Pos::try_new(6, 0),
        Err(EngineError::OutOfBounds { row: 6, col: 0 })
    );
}

#[test]
fn test_pos_step_and_label() {
    let corner = Pos::new(0, 0);
    assert_eq!(corner.step(Direction::Up), None);
    assert_eq!(corner.step(Direction::Left), None);
    assert_eq!(corner.step(Direction::Down), Some(Pos::new(1, 0)));
    assert_eq!(corner.step(Direction::Right), Some(Pos::new(0, 1)));
    assert_eq!(corner.label(), "A1");
    assert_eq!(Pos::new(5, 5).label(), "F6");
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 5) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_direction_deltas() {
    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        assert_eq!(dr.abs() + dc.abs(), 1);
        assert_eq!(Direction::from_delta(dr, dc), Some(dir));
    }
    assert_eq!(Direction::from_delta(1, 1), None);
    assert_eq!(Direction::from_delta(0, 0), None);
    assert_eq!(Direction::from_delta(2, 0), None);
}

#[test]
fn test_direction_set_keeps_declared_order() {
    let set: DirectionSet = [Direction::Right, Direction::Up, Direction::Left]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 3);
    assert!(!set.contains(Direction::Down));
    let order: Vec<_> = set.iter().collect();
    assert_eq!(order, vec![Direction::Up, Direction::Left, Direction::Right]);
    assert!(DirectionSet::EMPTY.is_empty());
}

#[test]
fn test_initial_layout() {
    let board = Board::initial();
    assert_eq!(board.piece_count(Player::A), PIECES_PER_PLAYER);
    assert_eq!(board.piece_count(Player::B), PIECES_PER_PLAYER);
    assert_eq!(board.empty_count(), 24);
    for (r, c) in [(0, 0), (0, 3), (2, 5), (3, 0), (5, 2), (5, 5)] {
        assert_eq!(board.get(Pos::new(r, c)), Cell::Piece(Player::A));
    }
    for (r, c) in [(0, 2), (0, 5), (2, 0), (3, 5), (5, 0), (5, 3)] {
        assert_eq!(board.get(Pos::new(r, c)), Cell::Piece(Player::B));
    }
}

#[test]
fn test_slide_to_edge() {
    let mut board = Board::new();
    board.place_piece(Pos::new(2, 2), Player::A);
    assert_eq!(board.slide_destination(Pos::new(2, 2), Direction::Up), Pos::new(0, 2));
    assert_eq!(board.slide_destination(Pos::new(2, 2), Direction::Down), Pos::new(5, 2));
    assert_eq!(board.slide_destination(Pos::new(2, 2), Direction::Left), Pos::new(2, 0));
    assert_eq!(board.slide_destination(Pos::new(2, 2), Direction::Right), Pos::new(2, 5));
}

#[test]
fn test_slide_stops_before_any_piece() {
    let mut board = Board::new();
    board.place_piece(Pos::new(0, 0), Player::A);
    board.place_piece(Pos::new(0, 4), Player::A); // own piece blocks too
    board.place_piece(Pos::new(3, 0), Player::B);

    assert_eq!(board.slide_destination(Pos::new(0, 0), Direction::Right), Pos::new(0, 3));
    assert_eq!(board.slide_destination(Pos::new(0, 0), Direction::Down), Pos::new(2, 0));
}

#[test]
fn test_slide_destination_is_farthest_empty_cell() {
    // Every piece of the initial board, every direction: walk the ray by hand.
    let board = Board::initial();
    for idx in 0..TOTAL_CELLS {
        let from = Pos::from_index(idx);
        if board.is_empty(from) {
            continue;
        }
        for dir in Direction::ALL {
            let mut expected = from;
            while let Some(next) = expected.step(dir) {
                if !board.is_empty(next) {
                    break;
                }
                expected = next;
            }
            assert_eq!(board.slide_destination(from, dir), expected);
        }
    }
}

#[test]
fn test_apply_move_relocates_piece() {
    let mut board = Board::initial();
    let dest = board
        .apply_move(Move::new(Pos::new(0, 0), Direction::Down), Player::A)
        .unwrap();
    assert_eq!(dest, Pos::new(1, 0));
    assert!(board.is_empty(Pos::new(0, 0)));
    assert_eq!(board.get(Pos::new(1, 0)), Cell::Piece(Player::A));
    assert_eq!(board.piece_count(Player::A), PIECES_PER_PLAYER);
}

#[test]
fn test_apply_move_rejects_foreign_piece() {
    let mut board = Board::initial();
    let before = board;
    let err = board
        .apply_move(Move::new(Pos::new(0, 2), Direction::Down), Player::A)
        .unwrap_err();
    assert!(matches!(err, EngineError::IllegalMove { .. }));
    assert_eq!(board, before);
}

#[test]
fn test_apply_move_rejects_blocked_direction() {
    let mut board = Board::initial();
    let before = board;
    // (0,0) cannot move up: off board
    assert!(board
        .apply_move(Move::new(Pos::new(0, 0), Direction::Up), Player::A)
        .is_err());
    // (0,2) B cannot move right: (0,3) holds A
    assert!(board
        .apply_move(Move::new(Pos::new(0, 2), Direction::Right), Player::B)
        .is_err());
    assert_eq!(board, before);
}

#[test]
fn test_with_move_leaves_original_untouched() {
    let board = Board::initial();
    let next = board.with_move(Move::new(Pos::new(2, 5), Direction::Left), Player::A);
    assert_eq!(board, Board::initial());
    assert_eq!(next.get(Pos::new(2, 1)), Cell::Piece(Player::A));
}

#[test]
fn test_slide_from_foreign_or_empty_cell_is_a_no_op() {
    let board = Board::initial();
    // (0,2) holds B, (1,1) is empty
    for from in [Pos::new(0, 2), Pos::new(1, 1)] {
        let mv = Move::new(from, Direction::Down);
        let next = board.with_move(mv, Player::A);
        assert_eq!(next, board);
        assert_eq!(next.piece_count(Player::A), PIECES_PER_PLAYER);
        assert_eq!(next.piece_count(Player::B), PIECES_PER_PLAYER);
    }

    let mut empty = Board::new();
    let dest = empty.slide(Move::new(Pos::new(0, 0), Direction::Down), Player::A);
    assert_eq!(dest, Pos::new(0, 0));
    assert_eq!(empty.piece_count(Player::A), 0);
}

#[test]
fn test_display_and_parse() {
    let board = Board::initial();
    let text = board.to_string();
    assert_eq!(text.lines().next(), Some("A.BA.B"));
    let parsed: Board = text.parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_parse_rejects_bad_layout() {
    assert!("A.....\n......".parse::<Board>().is_err());
    let bad = "X.....\n......\n......\n......\n......\n......";
    assert!(matches!(
        bad.parse::<Board>(),
        Err(EngineError::InvalidLayout(_))
    ));
}
