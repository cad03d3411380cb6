use egui::{Color32, Pos2, Vec2};

use crate::id_generator::generate_id;
use crate::shape::{ShapeKind, ShapeType, factory};

/// The active mode for clicks on the empty canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Circle,
    Rectangle,
    Triangle,
    Eraser,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Circle => "Circle",
            Tool::Rectangle => "Rectangle",
            Tool::Triangle => "Triangle",
            Tool::Eraser => "Eraser",
        }
    }

    /// The kind of shape this tool places, or `None` for the eraser
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Eraser => None,
        }
    }
}

/// Size of freshly placed shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefaults {
    pub circle_radius: f32,
    pub rectangle_size: Vec2,
    pub triangle_size: f32,
}

impl ShapeDefaults {
    pub const FULL: Self = Self {
        circle_radius: 30.0,
        rectangle_size: Vec2::new(60.0, 30.0),
        triangle_size: 40.0,
    };

    pub const COMPACT: Self = Self {
        circle_radius: 20.0,
        rectangle_size: Vec2::new(40.0, 20.0),
        triangle_size: 30.0,
    };

    /// Build a new shape of `kind` anchored at `pos`
    pub fn instantiate(&self, kind: ShapeKind, pos: Pos2, color: Color32) -> ShapeType {
        let id = generate_id();
        match kind {
            ShapeKind::Circle => factory::create_circle(id, pos, self.circle_radius, color),
            ShapeKind::Rectangle => factory::create_rectangle(id, pos, self.rectangle_size, color),
            ShapeKind::Triangle => factory::create_triangle(id, pos, self.triangle_size, color),
        }
    }
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self::FULL
    }
}
