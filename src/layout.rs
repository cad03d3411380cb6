//! Fixed window layouts.
//!
//! The full layout has a color palette, eight buttons and the complete
//! shortcut set. The compact layout is a smaller window with three tool
//! buttons and picks tools and colors from the keyboard.

use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::background::Gradient;
use crate::components::{ButtonAction, Swatch, ToolButton};
use crate::input::Keymap;
use crate::palette;
use crate::tools::{ShapeDefaults, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    #[default]
    Full,
    Compact,
}

const LIGHT_PINK: Color32 = Color32::from_rgb(255, 192, 203);
const PEACH: Color32 = Color32::from_rgb(255, 223, 186);
const SOFT_PINK: Color32 = Color32::from_rgb(255, 200, 200);
const LIGHT_CYAN: Color32 = Color32::from_rgb(200, 255, 255);
// Light gray (200, 200, 200) at alpha 150, premultiplied.
const BUTTON_GRAY: Color32 = Color32::from_rgba_premultiplied(118, 118, 118, 150);

/// Everything static about the window: size, background, widgets, sizes and keys.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    pub variant: LayoutVariant,
    pub size: Vec2,
    pub background: Gradient,
    pub swatches: Vec<Swatch>,
    pub buttons: Vec<ToolButton>,
    pub defaults: ShapeDefaults,
    pub keymap: Keymap,
}

impl CanvasLayout {
    pub fn new(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Full => Self::full(),
            LayoutVariant::Compact => Self::compact(),
        }
    }

    fn full() -> Self {
        let swatches = palette::SWATCHES
            .iter()
            .enumerate()
            .map(|(i, color)| Swatch::new(Pos2::new(10.0 + i as f32 * 40.0, 10.0), *color))
            .collect();

        let actions = [
            ("Circle", ButtonAction::SelectTool(Tool::Circle)),
            ("Rectangle", ButtonAction::SelectTool(Tool::Rectangle)),
            ("Triangle", ButtonAction::SelectTool(Tool::Triangle)),
            ("Eraser", ButtonAction::SelectTool(Tool::Eraser)),
            ("Clear", ButtonAction::Clear),
            ("Duplicate", ButtonAction::Duplicate),
            ("Invert", ButtonAction::Invert),
            ("Download", ButtonAction::Export),
        ];
        let buttons = actions
            .into_iter()
            .enumerate()
            .map(|(i, (label, action))| {
                ToolButton::new(Pos2::new(10.0 + i as f32 * 110.0, 50.0), label, action, BUTTON_GRAY)
            })
            .collect();

        Self {
            variant: LayoutVariant::Full,
            size: Vec2::new(1000.0, 700.0),
            background: Gradient::vertical(Color32::WHITE, LIGHT_PINK),
            swatches,
            buttons,
            defaults: ShapeDefaults::FULL,
            keymap: Keymap::full(),
        }
    }

    fn compact() -> Self {
        let buttons = [
            ("Circle", Tool::Circle),
            ("Rectangle", Tool::Rectangle),
            ("Triangle", Tool::Triangle),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (label, tool))| {
            ToolButton::new(
                Pos2::new(10.0 + i as f32 * 110.0, 10.0),
                label,
                ButtonAction::SelectTool(tool),
                Color32::TRANSPARENT,
            )
        })
        .collect();

        Self {
            variant: LayoutVariant::Compact,
            size: Vec2::new(800.0, 600.0),
            background: Gradient {
                top_left: PEACH,
                top_right: SOFT_PINK,
                bottom_left: LIGHT_CYAN,
                bottom_right: Color32::WHITE,
            },
            swatches: Vec::new(),
            buttons,
            defaults: ShapeDefaults::COMPACT,
            keymap: Keymap::compact(),
        }
    }

    /// The drawable area in canvas coordinates
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    /// Pixel dimensions of the canvas, as used for exports
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.size.x.round() as u32, self.size.y.round() as u32)
    }

    pub fn swatch_at(&self, pos: Pos2) -> Option<&Swatch> {
        self.swatches.iter().find(|swatch| swatch.contains(pos))
    }

    pub fn button_at(&self, pos: Pos2) -> Option<&ToolButton> {
        self.buttons.iter().find(|button| button.contains(pos))
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::new(LayoutVariant::default())
    }
}
