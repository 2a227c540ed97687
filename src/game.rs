//! Game session: whose turn it is, move history and the end of the game
//!
//! The board alone does not know whose turn it is or what happens when the
//! side to move is stuck. [`Game`] owns that:
//!
//! - a side with no legal move passes its turn
//! - when neither side can move the game is drawn
//! - the first completed line of four ends the game

use log::info;
use rand::Rng;

use crate::board::{Board, Move, Player, Pos};
use crate::error::EngineError;
use crate::rules::{available_squares, has_any_move, winner, SquareMoves};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What follows a played move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Normal alternation
    Next(Player),
    /// `blocked` had no legal move and `next` moves again
    Passed { blocked: Player, next: Player },
    Over(GameOutcome),
}

/// One played move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub player: Player,
    pub mv: Move,
    /// Where the piece came to rest
    pub to: Pos,
}

#[derive(Debug, Clone)]
pub struct Game {
    start: Board,
    first: Player,
    board: Board,
    to_move: Player,
    outcome: Option<GameOutcome>,
    history: Vec<PlayedMove>,
}

impl Game {
    /// New game on the standard layout
    pub fn new(first: Player) -> Self {
        Self::from_position(Board::initial(), first)
    }

    /// New game with a coin flip for the first player
    pub fn with_random_first<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = if rng.gen_bool(0.5) { Player::A } else { Player::B };
        info!("{} moves first", first);
        Self::new(first)
    }

    /// Game continuing from an arbitrary position.
    ///
    /// The position is settled right away: it may already be won, drawn, or
    /// require `to_move` to pass.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            start: board,
            first: to_move,
            board,
            to_move,
            outcome: None,
            history: Vec::new(),
        };
        game.settle();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move (the last mover once the game is over)
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn first_player(&self) -> Player {
        self.first
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// Movable pieces of the side to move; empty once the game is over
    pub fn available_squares(&self) -> Vec<SquareMoves> {
        if self.is_over() {
            Vec::new()
        } else {
            available_squares(&self.board, self.to_move)
        }
    }

    /// Play `mv` for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<(PlayedMove, Turn), EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let player = self.to_move;
        let to = self.board.apply_move(mv, player)?;
        let played = PlayedMove { player, mv, to };
        self.history.push(played);
        info!("move {}: {} {}", self.history.len(), player, mv);

        self.to_move = player.opponent();
        let turn = self.settle();
        Ok((played, turn))
    }

    /// Take back the last `count` moves, replaying the rest from the start.
    ///
    /// Returns how many moves were actually undone.
    pub fn undo(&mut self, count: usize) -> usize {
        let count = count.min(self.history.len());
        if count == 0 {
            return 0;
        }
        let keep = self.history.len() - count;
        let moves: Vec<Move> = self.history[..keep].iter().map(|p| p.mv).collect();

        let mut replay = Self::from_position(self.start, self.first);
        for mv in moves {
            // Every move already succeeded on this exact sequence of positions
            if replay.play(mv).is_err() {
                break;
            }
        }
        *self = replay;
        count
    }

    /// Resolve the position for the side to move
    fn settle(&mut self) -> Turn {
        if let Some(player) = winner(&self.board) {
            let outcome = GameOutcome::Winner(player);
            self.outcome = Some(outcome);
            info!("{} wins", player);
            return Turn::Over(outcome);
        }

        let current = self.to_move;
        if has_any_move(&self.board, current) {
            return Turn::Next(current);
        }

        let other = current.opponent();
        if has_any_move(&self.board, other) {
            info!("{} has no legal move and passes", current);
            self.to_move = other;
            return Turn::Passed {
                blocked: current,
                next: other,
            };
        }

        info!("neither side can move: draw");
        self.outcome = Some(GameOutcome::Draw);
        Turn::Over(GameOutcome::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(Player::B);
        assert_eq!(game.to_move(), Player::B);
        assert_eq!(game.first_player(), Player::B);
        assert!(!game.is_over());
        assert_eq!(game.available_squares().len(), 6);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_random_first_covers_both() {
        let mut rng = StdRng::seed_from_u64(7);
        let firsts: Vec<Player> = (0..32)
            .map(|_| Game::with_random_first(&mut rng).to_move())
            .collect();
        assert!(firsts.contains(&Player::A));
        assert!(firsts.contains(&Player::B));
    }

    #[test]
    fn test_play_alternates() {
        let mut game = Game::new(Player::A);
        let mv = Move::new(Pos::new(0, 0), Direction::Down);
        let (played, turn) = game.play(mv).unwrap();
        assert_eq!(played.to, Pos::new(1, 0));
        assert_eq!(turn, Turn::Next(Player::B));
        assert_eq!(game.to_move(), Player::B);
        assert_eq!(game.last_move(), Some(&played));
    }

    #[test]
    fn test_play_rejects_wrong_piece() {
        let mut game = Game::new(Player::A);
        let mv = Move::new(Pos::new(0, 2), Direction::Down);
        assert!(matches!(game.play(mv), Err(EngineError::IllegalMove { .. })));
        assert_eq!(game.to_move(), Player::A);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_win_ends_game() {
        let board = parse(
            "AAA...
             ......
             ......
             B.....
             ......
             ...A..",
        );
        let mut game = Game::from_position(board, Player::A);
        let (_, turn) = game
            .play(Move::new(Pos::new(5, 3), Direction::Up))
            .unwrap();
        assert_eq!(turn, Turn::Over(GameOutcome::Winner(Player::A)));
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Player::A)));
        assert!(game.available_squares().is_empty());

        let again = game.play(Move::new(Pos::new(3, 0), Direction::Up));
        assert_eq!(again, Err(EngineError::GameOver));
    }

    #[test]
    fn test_blocked_side_passes() {
        // B's only piece is boxed into the corner by A
        let board = parse(
            "BA....
             A.....
             ......
             ......
             ......
             ......",
        );
        let game = Game::from_position(board, Player::B);
        assert_eq!(game.to_move(), Player::A);
        assert!(!game.is_over());

        let mut game = Game::from_position(board, Player::A);
        let (_, turn) = game
            .play(Move::new(Pos::new(0, 1), Direction::Down))
            .unwrap();
        // B's corner piece is free again once (0,1) moves away
        assert_eq!(turn, Turn::Next(Player::B));
    }

    #[test]
    fn test_pass_reported_after_move() {
        let board = parse(
            "B.A...
             A.....
             ......
             ......
             ......
             ......",
        );
        let mut game = Game::from_position(board, Player::A);
        let (_, turn) = game
            .play(Move::new(Pos::new(0, 2), Direction::Left))
            .unwrap();
        assert_eq!(
            turn,
            Turn::Passed {
                blocked: Player::B,
                next: Player::A
            }
        );
        assert_eq!(game.to_move(), Player::A);
    }

    #[test]
    fn test_nobody_can_move_is_draw() {
        let board = parse(
            "ABABAB
             BABABA
             ABABAB
             BABABA
             ABABAB
             BABABA",
        );
        let game = Game::from_position(board, Player::A);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_undo_replays_history() {
        let mut game = Game::new(Player::A);
        let start = *game.board();
        game.play(Move::new(Pos::new(0, 0), Direction::Down)).unwrap();
        let after_one = *game.board();
        game.play(Move::new(Pos::new(0, 2), Direction::Down)).unwrap();

        assert_eq!(game.undo(1), 1);
        assert_eq!(*game.board(), after_one);
        assert_eq!(game.to_move(), Player::B);

        assert_eq!(game.undo(5), 1);
        assert_eq!(*game.board(), start);
        assert_eq!(game.to_move(), Player::A);
        assert_eq!(game.undo(1), 0);
    }
}
