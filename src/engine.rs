//! Main AI engine and the driver-facing entry points
//!
//! Drivers (the GUI, the self-play tool, tests) talk to the game through the
//! free functions in this module. They take players as numeric ids
//! (1 = [`Player::A`], 2 = [`Player::B`]) and reject anything else with
//! [`EngineError::InvalidPlayer`].
//!
//! Both difficulty tiers run the same [`Searcher`]:
//!
//! - **Normal**: depth 3, simple window evaluator, moves in generation order
//! - **Hard**: depth 4 (one more near the end of the game), richer evaluator,
//!   center-first ordering, adaptive depth and depth-biased terminal scores
//!
//! # Example
//!
//! ```
//! use crab_puzzle::engine::{apply_move, best_move_hard, create_initial_board, winner};
//!
//! let board = create_initial_board();
//! let mv = best_move_hard(&board, 2).unwrap().expect("B can move");
//! let next = apply_move(&board, mv, 2).unwrap();
//! assert_eq!(winner(&next), None);
//! ```

use std::fmt;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::error::{ConfigError, EngineError};
use crate::eval::{HardEvaluator, NormalEvaluator};
use crate::rules::{self, SquareMoves};
use crate::search::{CenterFirst, NaturalOrder, SearchConfig, SearchResult, SearchStats, Searcher};

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Normal,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search settings of both tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by the normal tier
    pub normal_depth: i8,
    /// Base plies searched by the hard tier
    pub hard_depth: i8,
    /// The hard tier searches deeper once fewer empty cells than this remain
    pub endgame_empty_cells: u32,
    /// Extra plies for the endgame
    pub endgame_extra_depth: i8,
    /// How far adaptive extensions may push past the root depth
    pub ceiling_offset: i8,
    /// Extend when the searching player, on its turn, has fewer movable
    /// pieces than this
    pub adaptive_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normal_depth: 3,
            hard_depth: 4,
            endgame_empty_cells: 10,
            endgame_extra_depth: 1,
            ceiling_offset: 2,
            adaptive_threshold: 3,
        }
    }
}

impl EngineConfig {
    /// Deepest total a hard search may reach
    const MAX_PLIES: i8 = 16;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normal_depth <= 0 {
            return Err(ConfigError::Validation(
                "engine.normal_depth must be > 0".to_string(),
            ));
        }
        if self.hard_depth <= 0 {
            return Err(ConfigError::Validation(
                "engine.hard_depth must be > 0".to_string(),
            ));
        }
        if self.endgame_extra_depth < 0 || self.ceiling_offset < 0 {
            return Err(ConfigError::Validation(
                "engine.endgame_extra_depth and engine.ceiling_offset must be >= 0".to_string(),
            ));
        }
        let deepest = i32::from(self.hard_depth)
            + i32::from(self.endgame_extra_depth)
            + i32::from(self.ceiling_offset);
        if self.normal_depth > Self::MAX_PLIES || deepest > i32::from(Self::MAX_PLIES) {
            return Err(ConfigError::Validation(format!(
                "engine search may not exceed {} plies",
                Self::MAX_PLIES
            )));
        }
        Ok(())
    }

    /// Search settings of the normal tier
    pub fn normal_search(&self) -> SearchConfig {
        SearchConfig::fixed(self.normal_depth)
    }

    /// Search settings of the hard tier for `board`
    pub fn hard_search(&self, board: &Board) -> SearchConfig {
        let mut depth = self.hard_depth;
        if board.empty_count() < self.endgame_empty_cells {
            depth = depth.saturating_add(self.endgame_extra_depth);
        }
        SearchConfig {
            depth,
            max_depth: depth.saturating_add(self.ceiling_offset),
            adaptive_threshold: self.adaptive_threshold,
            depth_bias: true,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` when the side to move is blocked
    pub best_move: Option<Move>,
    /// Score of the chosen line from the mover's view
    pub score: i32,
    pub difficulty: Difficulty,
    /// Root depth searched
    pub depth: i8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    fn from_search(result: SearchResult, difficulty: Difficulty, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            difficulty,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            stats: result.stats,
        }
    }
}

/// Main AI engine.
///
/// Holds only configuration; every search starts from a fresh [`Searcher`],
/// so one engine can serve both sides and both tiers.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the best move for the given position.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player, difficulty: Difficulty) -> Option<Move> {
        self.get_move_with_stats(board, player, difficulty).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(
        &self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> MoveResult {
        let start = Instant::now();
        let result = match difficulty {
            Difficulty::Normal => {
                Searcher::new(NormalEvaluator, NaturalOrder, self.config.normal_search())
                    .search(board, player)
            }
            Difficulty::Hard => {
                let mut searcher =
                    Searcher::new(HardEvaluator, CenterFirst, self.config.hard_search(board));
                debug!(
                    "hard search for {}: depth {}, ceiling {}",
                    player,
                    searcher.config().depth,
                    searcher.config().max_depth
                );
                searcher.search(board, player)
            }
        };
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(mv) => info!(
                "{} AI (player {}) plays {} (score {}, depth {}, {} nodes, {}ms)",
                difficulty,
                player.id(),
                mv,
                result.score,
                result.depth,
                result.stats.nodes,
                time_ms
            ),
            None => info!("{} AI (player {}) has no legal move", difficulty, player.id()),
        }
        MoveResult::from_search(result, difficulty, time_ms)
    }
}

/// Standard starting position
pub fn create_initial_board() -> Board {
    Board::initial()
}

/// Play `mv` for player `player_id` and return the resulting board.
///
/// The move is validated; the input board is left untouched.
pub fn apply_move(board: &Board, mv: Move, player_id: u8) -> Result<Board, EngineError> {
    let player = Player::try_from(player_id)?;
    let mut next = *board;
    next.apply_move(mv, player)?;
    Ok(next)
}

/// Every piece of `player_id` that can move, with its open directions
pub fn available_squares(board: &Board, player_id: u8) -> Result<Vec<SquareMoves>, EngineError> {
    let player = Player::try_from(player_id)?;
    Ok(rules::available_squares(board, player))
}

/// Owner of the first completed line, if any
pub fn winner(board: &Board) -> Option<Player> {
    rules::winner(board)
}

/// Normal-tier move for `player_id`; `Ok(None)` when that side is blocked
pub fn best_move_normal(board: &Board, player_id: u8) -> Result<Option<Move>, EngineError> {
    let player = Player::try_from(player_id)?;
    Ok(AIEngine::new().get_move(board, player, Difficulty::Normal))
}

/// Hard-tier move for `player_id`; `Ok(None)` when that side is blocked
pub fn best_move_hard(board: &Board, player_id: u8) -> Result<Option<Move>, EngineError> {
    let player = Player::try_from(player_id)?;
    Ok(AIEngine::new().get_move(board, player, Difficulty::Hard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Direction, Pos};
    use crate::rules::legal_moves;

    fn three_on_top() -> Board {
        "AAA...
         ......
         ......
         ......
         ......
         ...A.."
            .parse()
            .unwrap()
    }

    #[test]
    fn test_invalid_player_rejected() {
        let board = create_initial_board();
        let mv = Move::new(Pos::new(0, 0), Direction::Down);
        for id in [0u8, 3, 255] {
            assert_eq!(available_squares(&board, id), Err(EngineError::InvalidPlayer(id)));
            assert_eq!(best_move_normal(&board, id), Err(EngineError::InvalidPlayer(id)));
            assert_eq!(best_move_hard(&board, id), Err(EngineError::InvalidPlayer(id)));
            assert_eq!(apply_move(&board, mv, id), Err(EngineError::InvalidPlayer(id)));
        }
    }

    #[test]
    fn test_both_tiers_complete_the_line() {
        let board = three_on_top();
        let win = Move::new(Pos::new(5, 3), Direction::Up);

        for mv in [best_move_normal(&board, 1), best_move_hard(&board, 1)] {
            let mv = mv.unwrap().unwrap();
            assert_eq!(mv, win);
            let next = apply_move(&board, mv, 1).unwrap();
            assert_eq!(winner(&next), Some(Player::A));
        }
    }

    #[test]
    fn test_hard_move_on_initial_board_is_legal() {
        let board = create_initial_board();
        let mv = best_move_hard(&board, 2).unwrap().unwrap();

        assert_eq!(board.get(mv.from), Cell::Piece(Player::B));
        let dest = board.slide_destination(mv.from, mv.direction);
        assert_ne!(dest, mv.from);
        assert!(board.is_empty(dest));
        assert!(legal_moves(&board, Player::B).contains(&mv));
    }

    #[test]
    fn test_apply_move_keeps_piece_counts() {
        let mut board = create_initial_board();
        let mut id = 1u8;
        for _ in 0..10 {
            let Some(mv) = best_move_normal(&board, id).unwrap() else {
                break;
            };
            board = apply_move(&board, mv, id).unwrap();
            assert_eq!(board.piece_count(Player::A), 6);
            assert_eq!(board.piece_count(Player::B), 6);
            if winner(&board).is_some() {
                break;
            }
            id = 3 - id;
        }
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let board = create_initial_board();
        // (0,0) belongs to A
        let mv = Move::new(Pos::new(0, 0), Direction::Down);
        assert!(matches!(
            apply_move(&board, mv, 2),
            Err(EngineError::IllegalMove { .. })
        ));
        // Up from the top edge goes nowhere
        let mv = Move::new(Pos::new(0, 0), Direction::Up);
        assert!(matches!(
            apply_move(&board, mv, 1),
            Err(EngineError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_available_squares_by_id() {
        let board = create_initial_board();
        let a = available_squares(&board, 1).unwrap();
        let b = available_squares(&board, 2).unwrap();
        assert_eq!(a.len(), 6);
        assert_eq!(b.len(), 6);
        assert!(a.iter().all(|sq| board.get(sq.pos) == Cell::Piece(Player::A)));
    }

    #[test]
    fn test_hard_search_deepens_near_the_end() {
        let config = EngineConfig::default();
        let opening = config.hard_search(&Board::initial());
        assert_eq!(opening.depth, 4);
        assert_eq!(opening.max_depth, 6);
        assert!(opening.depth_bias);

        let crowded = EngineConfig {
            endgame_empty_cells: 30,
            ..EngineConfig::default()
        };
        assert_eq!(crowded.hard_search(&Board::initial()).depth, 5);
    }

    #[test]
    fn test_unvalidated_config_does_not_overflow() {
        let config = EngineConfig {
            hard_depth: i8::MAX,
            endgame_empty_cells: 40,
            endgame_extra_depth: i8::MAX,
            ceiling_offset: i8::MAX,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
        let search = config.hard_search(&Board::initial());
        assert_eq!(search.depth, i8::MAX);
        assert_eq!(search.max_depth, i8::MAX);
    }

    #[test]
    fn test_engine_config_validation() {
        assert!(EngineConfig::default().validate().is_ok());
        let bad = EngineConfig {
            hard_depth: 0,
            ..EngineConfig::default()
        };
        assert!(bad.validate().is_err());
        let deep = EngineConfig {
            hard_depth: 15,
            ..EngineConfig::default()
        };
        assert!(deep.validate().is_err());
    }

    #[test]
    fn test_move_result_reports_stats() {
        let engine = AIEngine::new();
        let result = engine.get_move_with_stats(&Board::initial(), Player::A, Difficulty::Normal);
        assert_eq!(result.difficulty, Difficulty::Normal);
        assert_eq!(result.depth, 3);
        assert_eq!(result.nodes, result.stats.nodes);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_blocked_side_gets_no_move() {
        let board: Board = "ABABAB
                            BABABA
                            ABABAB
                            BABABA
                            ABABAB
                            BABABA"
            .parse()
            .unwrap();
        assert_eq!(best_move_normal(&board, 1), Ok(None));
        assert_eq!(best_move_hard(&board, 2), Ok(None));
    }
}
