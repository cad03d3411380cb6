use egui::{Color32, Painter, Pos2, Rect, Vec2};

mod circle;
pub(crate) mod common;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use common::{CIRCLE_SEGMENTS, OUTLINE_COLOR, OUTLINE_THICKNESS};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::id_generator::ShapeId;

/// Errors raised by shape geometry operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidFactor(f32),
}

/// The three kinds of shape a user can place on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }
}

/// Common trait that every canvas shape implements
pub trait Shape {
    /// Get the unique identifier for this shape
    fn id(&self) -> ShapeId;

    fn kind(&self) -> ShapeKind;

    /// The point the shape is positioned, scaled and rotated around
    fn anchor(&self) -> Pos2;

    /// Get the fill color
    fn color(&self) -> Color32;

    /// Replace the fill color
    fn set_color(&mut self, color: Color32);

    /// Current rotation in degrees, clockwise on screen
    fn rotation(&self) -> f32;

    /// Outline polygon in canvas coordinates
    fn vertices(&self) -> Vec<Pos2>;

    /// Axis-aligned bounds of the rotated shape, outline included
    fn bounds(&self) -> Rect;

    /// Hit test. This is a bounding-box test, so it also reports hits in the
    /// empty corners around circles and triangles.
    fn contains(&self, pos: Pos2) -> bool {
        self.bounds().contains(pos)
    }

    /// Draw the shape using the provided painter, shifted by `offset`
    fn draw(&self, painter: &Painter, offset: Vec2);

    /// Translate the shape by the given delta
    fn translate(&mut self, delta: Vec2);

    /// Rotate about the anchor
    fn rotate(&mut self, degrees: f32);

    /// Multiply every linear dimension by `factor`, keeping the anchor fixed
    fn resize(&mut self, factor: f32) -> Result<(), ShapeError>;

    /// Deep copy at the same position under a new identity
    fn duplicate(&self, id: ShapeId) -> Self
    where
        Self: Sized;
}

/// Enumeration of all shape types on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Shape for ShapeType {
    fn id(&self) -> ShapeId {
        match self {
            ShapeType::Circle(c) => c.id(),
            ShapeType::Rectangle(r) => r.id(),
            ShapeType::Triangle(t) => t.id(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            ShapeType::Circle(c) => c.kind(),
            ShapeType::Rectangle(r) => r.kind(),
            ShapeType::Triangle(t) => t.kind(),
        }
    }

    fn anchor(&self) -> Pos2 {
        match self {
            ShapeType::Circle(c) => c.anchor(),
            ShapeType::Rectangle(r) => r.anchor(),
            ShapeType::Triangle(t) => t.anchor(),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            ShapeType::Circle(c) => c.color(),
            ShapeType::Rectangle(r) => r.color(),
            ShapeType::Triangle(t) => t.color(),
        }
    }

    fn set_color(&mut self, color: Color32) {
        match self {
            ShapeType::Circle(c) => c.set_color(color),
            ShapeType::Rectangle(r) => r.set_color(color),
            ShapeType::Triangle(t) => t.set_color(color),
        }
    }

    fn rotation(&self) -> f32 {
        match self {
            ShapeType::Circle(c) => c.rotation(),
            ShapeType::Rectangle(r) => r.rotation(),
            ShapeType::Triangle(t) => t.rotation(),
        }
    }

    fn vertices(&self) -> Vec<Pos2> {
        match self {
            ShapeType::Circle(c) => c.vertices(),
            ShapeType::Rectangle(r) => r.vertices(),
            ShapeType::Triangle(t) => t.vertices(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            ShapeType::Circle(c) => c.bounds(),
            ShapeType::Rectangle(r) => r.bounds(),
            ShapeType::Triangle(t) => t.bounds(),
        }
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        match self {
            ShapeType::Circle(c) => c.draw(painter, offset),
            ShapeType::Rectangle(r) => r.draw(painter, offset),
            ShapeType::Triangle(t) => t.draw(painter, offset),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            ShapeType::Circle(c) => c.translate(delta),
            ShapeType::Rectangle(r) => r.translate(delta),
            ShapeType::Triangle(t) => t.translate(delta),
        }
    }

    fn rotate(&mut self, degrees: f32) {
        match self {
            ShapeType::Circle(c) => c.rotate(degrees),
            ShapeType::Rectangle(r) => r.rotate(degrees),
            ShapeType::Triangle(t) => t.rotate(degrees),
        }
    }

    fn resize(&mut self, factor: f32) -> Result<(), ShapeError> {
        match self {
            ShapeType::Circle(c) => c.resize(factor),
            ShapeType::Rectangle(r) => r.resize(factor),
            ShapeType::Triangle(t) => t.resize(factor),
        }
    }

    fn duplicate(&self, id: ShapeId) -> Self {
        match self {
            ShapeType::Circle(c) => ShapeType::Circle(c.duplicate(id)),
            ShapeType::Rectangle(r) => ShapeType::Rectangle(r.duplicate(id)),
            ShapeType::Triangle(t) => ShapeType::Triangle(t.duplicate(id)),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    pub fn create_circle(id: ShapeId, center: Pos2, radius: f32, color: Color32) -> ShapeType {
        ShapeType::Circle(Circle::new(id, center, radius, color))
    }

    pub fn create_rectangle(id: ShapeId, center: Pos2, size: Vec2, color: Color32) -> ShapeType {
        ShapeType::Rectangle(Rectangle::new(id, center, size, color))
    }

    pub fn create_triangle(id: ShapeId, origin: Pos2, size: f32, color: Color32) -> ShapeType {
        ShapeType::Triangle(Triangle::new(id, origin, size, color))
    }
}
