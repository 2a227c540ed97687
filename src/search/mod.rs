//! Search module for the Crab Puzzle AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning and adaptive depth
//! - Move ordering strategies

pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{SearchConfig, SearchResult, SearchStats, Searcher, DRAW, INF};
pub use ordering::{score_move, CenterFirst, MoveOrdering, NaturalOrder};
