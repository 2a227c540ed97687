//! Theme constants for the Crab Puzzle GUI

use egui::Color32;

// Board colors - sandy beach tones
pub const BOARD_BG: Color32 = Color32::from_rgb(214, 190, 140);
pub const CELL_BG: Color32 = Color32::from_rgb(236, 218, 178);
pub const CELL_BORDER: Color32 = Color32::from_rgb(150, 120, 80);
pub const COORD_TEXT: Color32 = Color32::from_rgb(90, 65, 35);

// Piece colors
pub const GREEN_PIECE: Color32 = Color32::from_rgb(60, 170, 90);
pub const GREEN_PIECE_EDGE: Color32 = Color32::from_rgb(30, 110, 55);
pub const RED_PIECE: Color32 = Color32::from_rgb(215, 70, 60);
pub const RED_PIECE_EDGE: Color32 = Color32::from_rgb(140, 35, 30);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(255, 210, 60);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(70, 110, 220);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn destination_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 210, 60, 90)
}

pub fn movable_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const CELL_GAP: f32 = 4.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
