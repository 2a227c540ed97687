//! Board rendering for the Crab Puzzle GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE};

use super::game_state::SlideAnimation;
use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub selected: Option<Pos>,
    /// Pieces the human may pick up
    pub movable: &'a [Pos],
    /// Cells the selected piece can slide to
    pub destinations: &'a [Pos],
    /// Start and end of the last move
    pub last_move: Option<(Pos, Pos)>,
    pub winning_line: Option<[Pos; 4]>,
    pub animation: Option<&'a SlideAnimation>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

pub fn piece_colors(player: Player) -> (Color32, Color32) {
    match player {
        Player::A => (GREEN_PIECE, GREEN_PIECE_EDGE),
        Player::B => (RED_PIECE, RED_PIECE_EDGE),
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_cells(&painter, scene);
        self.draw_coordinates(&painter);

        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        self.draw_pieces(&painter, scene);

        if let Some((_, to)) = scene.last_move {
            if scene.animation.is_none() {
                painter.circle_filled(self.cell_center(to), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
            }
        }

        if !scene.interactive || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|p| self.screen_to_board(p))
    }

    /// Draw the 6x6 cells with selection and destination highlights
    fn draw_cells(&self, painter: &Painter, scene: &BoardScene<'_>) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let rect = self.cell_rect(pos);
            painter.rect_filled(rect, CornerRadius::same(4), CELL_BG);
            painter.rect_stroke(
                rect,
                CornerRadius::same(4),
                Stroke::new(1.0, CELL_BORDER),
                egui::StrokeKind::Inside,
            );

            if scene.interactive && scene.selected.is_none() && scene.movable.contains(&pos) {
                painter.rect_filled(rect.shrink(3.0), CornerRadius::same(3), movable_hint());
            }
            if scene.destinations.contains(&pos) {
                painter.rect_filled(rect.shrink(3.0), CornerRadius::same(3), destination_fill());
                painter.circle_stroke(
                    rect.center(),
                    self.cell_size * 0.12,
                    Stroke::new(2.0, SELECTED_RING),
                );
            }
        }

        if let Some((from, _)) = scene.last_move {
            if scene.animation.is_none() {
                painter.rect_stroke(
                    self.cell_rect(from).shrink(2.0),
                    CornerRadius::same(3),
                    Stroke::new(1.5, LAST_MOVE_MARKER),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    /// Draw coordinate labels (A-F, 1-6)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);

        for i in 0..BOARD_SIZE {
            let center = self.cell_center(Pos::new(i as u8, i as u8));

            let letter = (b'A' + i as u8) as char;
            let top = Pos2::new(center.x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, center.y);
            painter.text(left, egui::Align2::CENTER_CENTER, i + 1, font.clone(), COORD_TEXT);
        }
    }

    /// Draw all pieces, the sliding one at its in-flight position
    fn draw_pieces(&self, painter: &Painter, scene: &BoardScene<'_>) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let Cell::Piece(player) = scene.board.get(pos) else {
                continue;
            };
            if scene.animation.is_some_and(|a| a.to == pos) {
                continue;
            }
            self.draw_piece(painter, self.cell_center(pos), player, scene.selected == Some(pos));
        }

        if let Some(anim) = scene.animation {
            let from = self.cell_center(anim.from);
            let to = self.cell_center(anim.to);
            self.draw_piece(painter, from.lerp(to, anim.progress()), anim.player, false);
        }
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, center: Pos2, player: Player, selected: bool) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, edge) = piece_colors(player);

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 50),
        );

        let rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        painter.rect_filled(rect, CornerRadius::same(8), fill);
        painter.rect_stroke(rect, CornerRadius::same(8), Stroke::new(2.0, edge), egui::StrokeKind::Inside);

        if selected {
            painter.rect_stroke(
                rect.expand(4.0),
                CornerRadius::same(10),
                Stroke::new(3.0, SELECTED_RING),
                egui::StrokeKind::Outside,
            );
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 4]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(line[0]), self.cell_center(line[3])], stroke);

        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos),
                CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Inside,
            );
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + f32::from(pos.col) * self.cell_size,
                BOARD_MARGIN + f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP * 0.5)
    }

    /// Convert board position to screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
