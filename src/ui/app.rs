//! Main application for the Crab Puzzle GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Player;
use crate::config::AppConfig;
use crate::engine::Difficulty;
use crate::game::GameOutcome;

use super::board_view::{piece_colors, BoardScene, BoardView};
use super::game_state::{GameMode, GameState};
use super::theme::*;

const RULES: &str = "\
Objective
Line up four of your pieces in a row, horizontally or vertically. \
Diagonals do not count.

Setup
The board is a 6x6 grid. Each player starts with six pieces: Green and Red.

Moving
On your turn, move one of your pieces in a straight line, up, down, left \
or right. It slides as far as it can and stops at the edge of the board or \
in front of another piece, whoever owns it.

Turns
Players alternate. A player with no piece able to move passes. If neither \
player can move, the game is a draw.

Tips
Block your opponent's lines while building your own, and keep your pieces \
free to move.";

/// Main Crab Puzzle application
pub struct CrabPuzzleApp {
    state: GameState,
    board_view: BoardView,
    config: AppConfig,
    show_debug: bool,
    show_rules: bool,
}

impl CrabPuzzleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: GameState::new(GameMode::default(), &config),
            board_view: BoardView::default(),
            show_debug: config.ui.show_debug,
            show_rules: false,
            config,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, &self.config);
    }

    fn vs_cpu(difficulty: Difficulty) -> GameMode {
        GameMode::VsCpu {
            difficulty,
            human: Player::A,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs CPU - Normal)").clicked() {
                        self.new_game(Self::vs_cpu(Difficulty::Normal));
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs CPU - Hard)").clicked() {
                        self.new_game(Self::vs_cpu(Difficulty::Hard));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    if ui.button("Rules (R)").clicked() {
                        self.show_rules = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::VsCpu { difficulty, human } => {
                            format!("vs CPU ({}) - You: {}", difficulty, human.name())
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CRAB PUZZLE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("four in a row, one slide at a time").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (fill, edge) = piece_colors(turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                let piece = egui::Rect::from_center_size(rect.center(), Vec2::splat(36.0));
                ui.painter().rect_filled(piece, CornerRadius::same(8), fill);
                ui.painter().rect_stroke(
                    piece,
                    CornerRadius::same(8),
                    egui::Stroke::new(2.0, edge),
                    egui::StrokeKind::Inside,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("CPU thinking...", TIMER_WARNING)
                    } else if self.state.outcome().is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("CPU to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last CPU move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            ui.horizontal(|ui| {
                btn_frame.show(ui, |ui| {
                    let label = RichText::new("Undo").size(12.0).color(TEXT_PRIMARY);
                    if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                        self.state.undo();
                    }
                });
                ui.add_space(4.0);
                btn_frame.show(ui, |ui| {
                    let label = RichText::new("New Game").size(12.0).color(TEXT_PRIMARY);
                    if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("{} moved first", self.state.game.first_player().name()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for CPU...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{} depth {}", result.difficulty, result.depth))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                let stats = &result.stats;
                ui.label(
                    RichText::new(format!(
                        "{} cutoffs ({:.0}% first move), {} extensions, {} passes",
                        stats.beta_cutoffs,
                        stats.first_move_rate(),
                        stats.extensions,
                        stats.passes,
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );

                if let Some(mv) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", mv)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (headline, detail) = match outcome {
            GameOutcome::Winner(player) => (
                format!("{} WINS!", player.name().to_uppercase()),
                "by four in a row",
            ),
            GameOutcome::Draw => ("DRAW".to_string(), "neither side can move"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY);
                            if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_rules_window(&mut self, ctx: &Context) {
        egui::Window::new("Crab Puzzle Rules")
            .open(&mut self.show_rules)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label(RULES);
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let movable = self.state.movable_pieces();
            let destinations: Vec<_> = self.state.destinations().into_iter().map(|(_, to)| to).collect();
            let winning_line = self.state.winning_line();
            let last_move = self.state.game.last_move().map(|p| (p.mv.from, p.to));

            let scene = BoardScene {
                board: self.state.game.board(),
                selected: self.state.selected,
                movable: &movable,
                destinations: &destinations,
                last_move,
                winning_line,
                animation: self.state.animation.as_ref(),
                interactive: self.state.accepts_input(),
            };

            if let Some(pos) = self.board_view.show(ui, &scene) {
                self.state.click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::R) {
                self.show_rules = !self.show_rules;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.deselect();
            }
        });
    }
}

impl eframe::App for CrabPuzzleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.finish_animation();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_animating() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_rules_window(ctx);

        // Request repaint if animation is playing or AI is thinking
        if self.state.is_ai_thinking() || self.state.is_animating() {
            ctx.request_repaint();
        }
    }
}
