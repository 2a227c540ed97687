//! Crab Puzzle game engine
//!
//! A two-player sliding game on a 6x6 board:
//! - Each player starts with six pieces
//! - A move slides one piece as far as it goes in one of four directions
//! - Four in a row, horizontally or vertically, wins
//! - A player with no legal move passes; if nobody can move it is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Slide move generation and win detection
//! - [`eval`]: Position evaluation for both AI tiers
//! - [`search`]: Alpha-beta search with pluggable evaluation and ordering
//! - [`engine`]: Driver entry points and the AI engine
//! - [`game`]: Game session with turn order and pass rule
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use crab_puzzle::{AIEngine, Difficulty, Game, Player};
//!
//! let mut game = Game::new(Player::A);
//! let engine = AIEngine::new();
//!
//! let mv = engine
//!     .get_move(game.board(), game.to_move(), Difficulty::Normal)
//!     .expect("the opening position has moves");
//! game.play(mv).unwrap();
//! assert_eq!(game.to_move(), Player::B);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Move, Player, Pos, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{AIEngine, Difficulty, EngineConfig, MoveResult};
pub use error::{ConfigError, EngineError};
pub use game::{Game, GameOutcome, Turn};
