//! Headless CPU vs CPU games for comparing the two AI tiers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crab_puzzle::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crab_puzzle::{AIEngine, Difficulty, Game, GameOutcome, Player};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Normal,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Normal => Difficulty::Normal,
            Level::Hard => Difficulty::Hard,
        }
    }
}

/// Let the CPU play against itself.
#[derive(Parser)]
#[command(name = "selfplay", about = "Play Crab Puzzle CPU vs CPU")]
struct Cli {
    /// Strength of Green (player A)
    #[arg(long, value_enum, default_value = "hard")]
    green: Level,

    /// Strength of Red (player B)
    #[arg(long, value_enum, default_value = "normal")]
    red: Level,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Stop a game as a draw after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Seed for the first-player coin flip
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Tally {
    green: u32,
    red: u32,
    draws: u32,
    plies: usize,
    nodes: u64,
    time_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let engine = AIEngine::with_config(config.engine);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tally = Tally::default();
    for round in 1..=cli.games {
        let mut game = Game::with_random_first(&mut rng);
        info!("game {} starts with {}", round, game.to_move());

        while !game.is_over() && game.history().len() < cli.max_plies {
            let player = game.to_move();
            let level = match player {
                Player::A => cli.green,
                Player::B => cli.red,
            };
            let result = engine.get_move_with_stats(game.board(), player, level.into());
            tally.nodes += result.nodes;
            tally.time_ms += result.time_ms;

            let mv = result
                .best_move
                .with_context(|| format!("{} had no move in an unfinished game", player))?;
            game.play(mv)?;
            if cli.verbose {
                println!("{}: {} (score {})\n{}", player, mv, result.score, game.board());
            }
        }

        tally.plies += game.history().len();
        let verdict = match game.outcome() {
            Some(GameOutcome::Winner(Player::A)) => {
                tally.green += 1;
                "Green wins"
            }
            Some(GameOutcome::Winner(Player::B)) => {
                tally.red += 1;
                "Red wins"
            }
            Some(GameOutcome::Draw) => {
                tally.draws += 1;
                "draw (nobody can move)"
            }
            None => {
                tally.draws += 1;
                "draw (ply limit)"
            }
        };
        println!(
            "game {}: {} after {} plies, {} moved first",
            round,
            verdict,
            game.history().len(),
            game.first_player()
        );
        println!("{}", game.board());
    }

    println!(
        "Green ({:?}) {} - Red ({:?}) {} - draws {}",
        cli.green, tally.green, cli.red, tally.red, tally.draws
    );
    if tally.plies > 0 {
        println!(
            "{} plies, {:.0} nodes/move, {:.1}ms/move",
            tally.plies,
            tally.nodes as f64 / tally.plies as f64,
            tally.time_ms as f64 / tally.plies as f64
        );
    }
    Ok(())
}
