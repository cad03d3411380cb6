use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{Shape, ShapeError, ShapeKind, common};
use crate::id_generator::ShapeId;

/// A filled circle anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: ShapeId,
    center: Pos2,
    radius: f32,
    rotation: f32,
    fill: Color32,
}

impl Circle {
    pub fn new(id: ShapeId, center: Pos2, radius: f32, fill: Color32) -> Self {
        Self {
            id,
            center,
            radius,
            rotation: 0.0,
            fill,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn anchor(&self) -> Pos2 {
        self.center
    }

    fn color(&self) -> Color32 {
        self.fill
    }

    fn set_color(&mut self, color: Color32) {
        self.fill = color;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn vertices(&self) -> Vec<Pos2> {
        let step = 360.0 / common::CIRCLE_SEGMENTS as f32;
        (0..common::CIRCLE_SEGMENTS)
            .map(|i| {
                let offset = common::rotate_vec(Vec2::new(0.0, -self.radius), step * i as f32 + self.rotation);
                self.center + offset
            })
            .collect()
    }

    fn bounds(&self) -> Rect {
        // Rotating a circle changes nothing visible, but its square local bounds still turn.
        let half = Vec2::splat(self.radius + common::OUTLINE_THICKNESS);
        common::rotated_bounds(self.center, -half, half, self.rotation)
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        painter.circle(self.center + offset, self.radius, self.fill, common::outline_stroke());
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn rotate(&mut self, degrees: f32) {
        self.rotation = common::normalize_degrees(self.rotation + degrees);
    }

    fn resize(&mut self, factor: f32) -> Result<(), ShapeError> {
        common::validate_factor(factor)?;
        self.radius *= factor;
        Ok(())
    }

    fn duplicate(&self, id: ShapeId) -> Self {
        Self { id, ..self.clone() }
    }
}
