//! GUI module for Crab Puzzle
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CrabPuzzleApp;
pub use game_state::{GameMode, GameState, SlideAnimation};

use crate::error::ConfigError;

/// GUI settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Slide animation time per cell travelled, in milliseconds (0 disables it)
    pub slide_ms_per_cell: u64,
    /// Whether the AI debug card starts open
    pub show_debug: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            slide_ms_per_cell: 60,
            show_debug: false,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slide_ms_per_cell > 1000 {
            return Err(ConfigError::Validation(
                "ui.slide_ms_per_cell must be <= 1000".into(),
            ));
        }
        Ok(())
    }
}
