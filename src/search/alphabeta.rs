//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Crab Puzzle AI.
//! One searcher serves both difficulty tiers; what differs is plugged in:
//!
//! - an [`Evaluator`] scoring leaves
//! - a [`MoveOrdering`] sorting candidates before expansion
//! - a [`SearchConfig`] with depth, depth ceiling, adaptive-depth threshold
//!   and whether terminal scores carry a depth bias
//!
//! # Example
//!
//! ```
//! use crab_puzzle::board::{Board, Player};
//! use crab_puzzle::eval::NormalEvaluator;
//! use crab_puzzle::search::{NaturalOrder, SearchConfig, Searcher};
//!
//! let mut searcher = Searcher::new(NormalEvaluator, NaturalOrder, SearchConfig::fixed(3));
//! let result = searcher.search(&Board::initial(), Player::A);
//! assert!(result.best_move.is_some());
//! ```

use log::debug;

use crate::board::{Board, Move, Player};
use crate::eval::Evaluator;
use crate::rules::{available_squares, has_any_move, winner};

use super::ordering::MoveOrdering;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000;

/// Score of a position where neither side can move
pub const DRAW: i32 = 0;

/// Depth settings of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root
    pub depth: i8,
    /// Ceiling on plies from the root plus remaining depth. Adaptive
    /// extensions are only granted below it.
    pub max_depth: i8,
    /// Extend by one ply when the searching player, on its own turn, has
    /// fewer movable pieces than this. Zero disables extensions.
    pub adaptive_threshold: usize,
    /// Win scores gain the remaining depth (faster wins score higher) and
    /// loss scores lose it (slower losses score higher).
    pub depth_bias: bool,
}

impl SearchConfig {
    /// Plain fixed-depth search
    pub fn fixed(depth: i8) -> Self {
        Self {
            depth,
            max_depth: depth,
            adaptive_threshold: 0,
            depth_bias: false,
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total nodes visited
    pub nodes: u64,
    /// Total cutoffs (beta <= alpha)
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Plies granted by adaptive depth
    pub extensions: u64,
    /// Nodes where the side to move had to pass
    pub passes: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Evaluation score of the best move from the searching side's view
    pub score: i32,
    /// Root depth searched
    pub depth: i8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher.
pub struct Searcher<E, O> {
    evaluator: E,
    ordering: O,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E: Evaluator, O: MoveOrdering> Searcher<E, O> {
    #[must_use]
    pub fn new(evaluator: E, ordering: O, config: SearchConfig) -> Self {
        Self {
            evaluator,
            ordering,
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Choose the best move for `player` with alpha-beta pruning.
    ///
    /// Ties keep the first candidate in expansion order.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        self.stats = SearchStats::default();
        let depth = self.config.depth;
        let (score, best_move) = self.alpha_beta(board, depth, -INF, INF, true, player, 0);
        debug!(
            "alpha-beta depth {} for {}: score {}, move {:?}, {} nodes, {} cutoffs ({:.1}% first move), {} extensions",
            depth,
            player,
            score,
            best_move,
            self.stats.nodes,
            self.stats.beta_cutoffs,
            self.stats.first_move_rate(),
            self.stats.extensions,
        );
        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        }
    }

    /// Exhaustive minimax with the same scoring, extensions and pass rule
    /// but no pruning. Reference for checking the pruned search.
    #[must_use]
    pub fn search_full_width(&mut self, board: &Board, player: Player) -> SearchResult {
        self.stats = SearchStats::default();
        let depth = self.config.depth;
        let (score, best_move) = self.minimax(board, depth, true, player, 0);
        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        }
    }

    /// Score of a decided or depth-exhausted node, if it is one
    #[inline]
    fn leaf_score(&self, board: &Board, depth: i8, root: Player) -> Option<i32> {
        let win = self.evaluator.win_score();
        let bias = if self.config.depth_bias { i32::from(depth) } else { 0 };
        match winner(board) {
            Some(p) if p == root => Some(win + bias),
            Some(_) => Some(-win - bias),
            None if depth <= 0 => Some(self.evaluator.evaluate(board, root)),
            None => None,
        }
    }

    /// Remaining depth handed to children of a node with `movable` pieces.
    /// Only the root player's nodes are extended.
    #[inline]
    fn child_depth(&mut self, depth: i8, ply: i8, movable: usize, maximizing: bool) -> i8 {
        let threshold = self.config.adaptive_threshold;
        if maximizing && movable < threshold && ply + depth < self.config.max_depth {
            self.stats.extensions += 1;
            depth
        } else {
            depth - 1
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Player,
        ply: i8,
    ) -> (i32, Option<Move>) {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth, root) {
            return (score, None);
        }

        let mover = if maximizing { root } else { root.opponent() };
        let squares = available_squares(board, mover);

        // Blocked side passes; nobody able to move is a draw
        if squares.is_empty() {
            if !has_any_move(board, mover.opponent()) {
                return (DRAW, None);
            }
            self.stats.passes += 1;
            let (score, _) = self.alpha_beta(board, depth - 1, alpha, beta, !maximizing, root, ply + 1);
            return (score, None);
        }

        let child_depth = self.child_depth(depth, ply, squares.len(), maximizing);
        let mut moves: Vec<Move> = squares.iter().flat_map(|s| s.moves()).collect();
        self.ordering.order(board, mover, &mut moves);

        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for (i, &mv) in moves.iter().enumerate() {
            let child = board.with_move(mv, mover);
            let (score, _) = self.alpha_beta(&child, child_depth, alpha, beta, !maximizing, root, ply + 1);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best_score, best_move)
    }

    fn minimax(&mut self, board: &Board, depth: i8, maximizing: bool, root: Player, ply: i8) -> (i32, Option<Move>) {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth, root) {
            return (score, None);
        }

        let mover = if maximizing { root } else { root.opponent() };
        let squares = available_squares(board, mover);

        if squares.is_empty() {
            if !has_any_move(board, mover.opponent()) {
                return (DRAW, None);
            }
            self.stats.passes += 1;
            let (score, _) = self.minimax(board, depth - 1, !maximizing, root, ply + 1);
            return (score, None);
        }

        let child_depth = self.child_depth(depth, ply, squares.len(), maximizing);
        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for mv in squares.iter().flat_map(|s| s.moves()) {
            let child = board.with_move(mv, mover);
            let (score, _) = self.minimax(&child, child_depth, !maximizing, root, ply + 1);
            let better = if maximizing { score > best_score } else { score < best_score };
            if better {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }
}
