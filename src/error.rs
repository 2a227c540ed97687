use std::path::PathBuf;

use crate::board::Move;

/// Errors raised by the game engine at its driver boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid player id {0} (expected 1 or 2)")]
    InvalidPlayer(u8),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Pos};

    #[test]
    fn test_invalid_player_display() {
        let err = EngineError::InvalidPlayer(3);
        assert_eq!(err.to_string(), "invalid player id 3 (expected 1 or 2)");
    }

    #[test]
    fn test_illegal_move_display() {
        let err = EngineError::IllegalMove {
            mv: Move::new(Pos::new(0, 0), Direction::Up),
            reason: "direction is blocked",
        };
        assert_eq!(err.to_string(), "illegal move A1 up: direction is blocked");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.normal_depth must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.normal_depth must be > 0"
        );
    }
}
