use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use crate::tools::Tool;

pub const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 30.0);
pub const LABEL_SIZE: f32 = 20.0;
pub const LABEL_COLOR: Color32 = Color32::BLACK;

/// What clicking a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    SelectTool(Tool),
    Clear,
    Duplicate,
    Invert,
    Export,
}

/// A labelled, fixed-position button in the canvas overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolButton {
    pub rect: Rect,
    pub label: &'static str,
    pub action: ButtonAction,
    pub fill: Color32,
}

impl ToolButton {
    pub fn new(min: Pos2, label: &'static str, action: ButtonAction, fill: Color32) -> Self {
        Self {
            rect: Rect::from_min_size(min, BUTTON_SIZE),
            label,
            action,
            fill,
        }
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }

    /// Paint the button. The label is skipped when no label font is available.
    pub fn show(&self, painter: &Painter, offset: Vec2, font: Option<&FontId>) {
        let rect = self.rect.translate(offset);
        if self.fill != Color32::TRANSPARENT {
            painter.rect_filled(rect, 0.0, self.fill);
        }

        if let Some(font) = font {
            painter.text(rect.left_top(), Align2::LEFT_TOP, self.label, font.clone(), LABEL_COLOR);
        }
    }
}
