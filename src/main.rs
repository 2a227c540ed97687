//! Crab Puzzle GUI
//!
//! A graphical interface for playing Crab Puzzle against the CPU or another player.

use std::path::Path;

use crab_puzzle::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crab_puzzle::ui::CrabPuzzleApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Crab Puzzle"),
        ..Default::default()
    };

    eframe::run_native(
        "Crab Puzzle",
        options,
        Box::new(|cc| Ok(Box::new(CrabPuzzleApp::new(cc, config)))),
    )?;
    Ok(())
}
