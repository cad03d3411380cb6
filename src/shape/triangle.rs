use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{Shape, ShapeError, ShapeKind, common};
use crate::id_generator::ShapeId;

/// An upward-pointing isosceles triangle.
///
/// The vertices are stored as offsets from `origin`; resizing scales the offsets
/// in place so the origin never moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    id: ShapeId,
    origin: Pos2,
    points: [Vec2; 3],
    rotation: f32,
    fill: Color32,
}

impl Triangle {
    pub fn new(id: ShapeId, origin: Pos2, size: f32, fill: Color32) -> Self {
        let half = size / 2.0;
        Self {
            id,
            origin,
            points: [
                Vec2::new(0.0, -half),
                Vec2::new(-half, half),
                Vec2::new(half, half),
            ],
            rotation: 0.0,
            fill,
        }
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Edge length of the triangle's base.
    pub fn size(&self) -> f32 {
        self.points[2].x * 2.0
    }

    pub fn offsets(&self) -> [Vec2; 3] {
        self.points
    }
}

impl Shape for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn anchor(&self) -> Pos2 {
        self.origin
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
        self.points
            .iter()
            .map(|offset| self.origin + common::rotate_vec(*offset, self.rotation))
            .collect()
    }

    fn bounds(&self) -> Rect {
        let local = common::calculate_bounds(&self.points.map(|p| p.to_pos2()), common::OUTLINE_THICKNESS);
        common::rotated_bounds(self.origin, local.min.to_vec2(), local.max.to_vec2(), self.rotation)
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        let points = self.vertices().into_iter().map(|p| p + offset).collect();
        painter.add(egui::Shape::convex_polygon(points, self.fill, common::outline_stroke()));
    }

    fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    fn rotate(&mut self, degrees: f32) {
        self.rotation = common::normalize_degrees(self.rotation + degrees);
    }

    fn resize(&mut self, factor: f32) -> Result<(), ShapeError> {
        common::validate_factor(factor)?;
        for point in &mut self.points {
            *point *= factor;
        }
        Ok(())
    }

    fn duplicate(&self, id: ShapeId) -> Self {
        Self { id, ..self.clone() }
    }
}
