use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{Shape, ShapeError, ShapeKind, common};
use crate::id_generator::ShapeId;

/// An axis-aligned (until rotated) rectangle anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: ShapeId,
    center: Pos2,
    size: Vec2,
    rotation: f32,
    fill: Color32,
}

impl Rectangle {
    pub fn new(id: ShapeId, center: Pos2, size: Vec2, fill: Color32) -> Self {
        Self {
            id,
            center,
            size,
            rotation: 0.0,
            fill,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
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
        let half = self.size / 2.0;
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .into_iter()
        .map(|corner| self.center + common::rotate_vec(corner, self.rotation))
        .collect()
    }

    fn bounds(&self) -> Rect {
        let half = self.size / 2.0 + Vec2::splat(common::OUTLINE_THICKNESS);
        common::rotated_bounds(self.center, -half, half, self.rotation)
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        let points = self.vertices().into_iter().map(|p| p + offset).collect();
        painter.add(egui::Shape::convex_polygon(points, self.fill, common::outline_stroke()));
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn rotate(&mut self, degrees: f32) {
        self.rotation = common::normalize_degrees(self.rotation + degrees);
    }

    fn resize(&mut self, factor: f32) -> Result<(), ShapeError> {
        common::validate_factor(factor)?;
        self.size *= factor;
        Ok(())
    }

    fn duplicate(&self, id: ShapeId) -> Self {
        Self { id, ..self.clone() }
    }
}
