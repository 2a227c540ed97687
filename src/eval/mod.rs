//! Evaluation module for Crab Puzzle positions
//!
//! This module provides window pattern scoring for board positions.
//! The hard tier additionally considers:
//! - Center control
//! - Mobility

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_hard, evaluate_normal, Evaluator, HardEvaluator, NormalEvaluator};
pub use patterns::{HardScore, NormalScore};
