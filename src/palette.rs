//! Fill colors offered by the UI and the color inversion used by the invert command.

use egui::Color32;

/// Color new shapes get before the user picks one.
pub const DEFAULT_COLOR: Color32 = Color32::BLUE;

pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
pub const GREEN: Color32 = Color32::from_rgb(0, 255, 0);
pub const BLUE: Color32 = Color32::from_rgb(0, 0, 255);
pub const YELLOW: Color32 = Color32::from_rgb(255, 255, 0);
pub const MAGENTA: Color32 = Color32::from_rgb(255, 0, 255);

/// Swatch colors shown in the full layout, left to right.
pub const SWATCHES: [Color32; 5] = [RED, GREEN, BLUE, YELLOW, MAGENTA];

/// Per-channel `255 - c`. The result is always opaque.
pub fn invert(color: Color32) -> Color32 {
    Color32::from_rgb(255 - color.r(), 255 - color.g(), 255 - color.b())
}
