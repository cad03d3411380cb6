use egui::{Color32, Painter, Pos2, Rect, Vec2};

pub const SWATCH_SIZE: Vec2 = Vec2::new(30.0, 30.0);

/// A clickable square that picks its own color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub rect: Rect,
    pub color: Color32,
}

impl Swatch {
    pub fn new(min: Pos2, color: Color32) -> Self {
        Self {
            rect: Rect::from_min_size(min, SWATCH_SIZE),
            color,
        }
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }

    pub fn show(&self, painter: &Painter, offset: Vec2) {
        painter.rect_filled(self.rect.translate(offset), 0.0, self.color);
    }
}
