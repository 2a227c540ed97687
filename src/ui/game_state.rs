//! Game state management for the Crab Puzzle GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{error, warn};

use crate::board::{Direction, Move, Player, Pos};
use crate::config::AppConfig;
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::game::{Game, GameOutcome, Turn};
use crate::rules::{available_moves_for_piece, winning_line};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PvP,
    /// Player vs CPU; the CPU plays the other side
    VsCpu { difficulty: Difficulty, human: Player },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsCpu {
            difficulty: Difficulty::Normal,
            human: Player::A,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// A piece gliding from its start cell to where it came to rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    pub player: Player,
    pub from: Pos,
    pub to: Pos,
    start_time: Instant,
    duration: Duration,
}

impl SlideAnimation {
    pub fn new(player: Player, from: Pos, to: Pos, ms_per_cell: u64) -> Self {
        let cells = u64::from(from.row.abs_diff(to.row) + from.col.abs_diff(to.col));
        Self {
            player,
            from,
            to,
            start_time: Instant::now(),
            duration: Duration::from_millis(cells * ms_per_cell),
        }
    }

    /// Eased progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (self.start_time.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn is_complete(&self) -> bool {
        self.start_time.elapsed() >= self.duration
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    /// Piece picked by the human, waiting for a destination
    pub selected: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub animation: Option<SlideAnimation>,
    pub move_timer: MoveTimer,
    pub message: Option<String>,

    engine: AIEngine,
    slide_ms_per_cell: u64,
}

impl GameState {
    pub fn new(mode: GameMode, config: &AppConfig) -> Self {
        Self {
            game: Game::with_random_first(&mut rand::thread_rng()),
            mode,
            selected: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            animation: None,
            move_timer: MoveTimer::default(),
            message: None,
            engine: AIEngine::with_config(config.engine.clone()),
            slide_ms_per_cell: config.ui.slide_ms_per_cell,
        }
    }

    /// Start over in the same mode with a fresh coin flip
    pub fn reset(&mut self) {
        self.game = Game::with_random_first(&mut rand::thread_rng());
        self.selected = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.animation = None;
        self.move_timer = MoveTimer::default();
        self.message = None;
    }

    pub fn current_turn(&self) -> Player {
        self.game.to_move()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game.outcome()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::VsCpu { human, .. } => self.current_turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether board clicks are accepted right now
    pub fn accepts_input(&self) -> bool {
        !self.game.is_over() && self.is_human_turn() && !self.is_ai_thinking() && !self.is_animating()
    }

    /// Cells of the completed line, once someone has won
    pub fn winning_line(&self) -> Option<[Pos; 4]> {
        match self.outcome() {
            Some(GameOutcome::Winner(_)) => winning_line(self.game.board()).map(|(_, line)| line),
            _ => None,
        }
    }

    /// Pieces of the side to move that have somewhere to go
    pub fn movable_pieces(&self) -> Vec<Pos> {
        self.game.available_squares().iter().map(|sq| sq.pos).collect()
    }

    /// Where the selected piece can slide, by direction
    pub fn destinations(&self) -> Vec<(Direction, Pos)> {
        let Some(from) = self.selected else {
            return Vec::new();
        };
        let board = self.game.board();
        available_moves_for_piece(board, from)
            .iter()
            .map(|dir| (dir, board.slide_destination(from, dir)))
            .collect()
    }

    /// Handle a click on a board cell
    pub fn click(&mut self, pos: Pos) {
        if !self.accepts_input() {
            return;
        }

        if let Some(from) = self.selected {
            if let Some((dir, _)) = self.destinations().into_iter().find(|&(_, to)| to == pos) {
                self.selected = None;
                self.execute_move(Move::new(from, dir));
                return;
            }
        }

        if self.movable_pieces().contains(&pos) {
            self.selected = if self.selected == Some(pos) { None } else { Some(pos) };
            self.message = None;
        } else {
            self.selected = None;
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        match self.game.play(mv) {
            Ok((played, turn)) => {
                self.animation = Some(SlideAnimation::new(
                    played.player,
                    mv.from,
                    played.to,
                    self.slide_ms_per_cell,
                ));
                self.message = match turn {
                    Turn::Passed { blocked, .. } => {
                        Some(format!("{} has no legal move and passes", blocked.name()))
                    }
                    Turn::Over(GameOutcome::Draw) => Some("Neither side can move".to_string()),
                    Turn::Next(_) | Turn::Over(GameOutcome::Winner(_)) => None,
                };
                self.move_timer.start();
            }
            Err(e) => {
                warn!("rejected move {}: {}", mv, e);
                self.message = Some(e.to_string());
            }
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_animating() {
            return;
        }
        let GameMode::VsCpu { difficulty, .. } = self.mode else {
            return;
        };

        let board = *self.game.board();
        let player = self.current_turn();
        let engine = self.engine.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, player, difficulty);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    error!("AI worker thread hung up without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best {
                Some(mv) => self.execute_move(mv),
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Drop the slide animation once it has played out
    pub fn finish_animation(&mut self) {
        if self.animation.is_some_and(|a| a.is_complete()) {
            self.animation = None;
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        // Against the CPU, roll back to the human's last turn
        let undone = self.game.undo(1);
        if undone > 0 && matches!(self.mode, GameMode::VsCpu { .. }) {
            while !self.is_human_turn() && self.game.undo(1) > 0 {}
        }

        self.selected = None;
        self.animation = None;
        self.message = None;
        self.move_timer.start();
    }
}
