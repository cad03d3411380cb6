use egui::{Color32, Pos2, Rect, Vec2};

use super::ShapeError;

// Every shape shares the same outline.
pub const OUTLINE_THICKNESS: f32 = 1.0;
pub const OUTLINE_COLOR: Color32 = Color32::BLACK;

/// Number of segments used when a circle has to be flattened into a polygon.
pub const CIRCLE_SEGMENTS: usize = 30;

pub(crate) fn outline_stroke() -> egui::Stroke {
    egui::Stroke::new(OUTLINE_THICKNESS, OUTLINE_COLOR)
}

/// Rejects scale factors that would collapse or flip a shape.
pub(crate) fn validate_factor(factor: f32) -> Result<(), ShapeError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidFactor(factor))
    }
}

/// Rotate `v` clockwise (in screen space, y pointing down) by `degrees`.
pub(crate) fn rotate_vec(v: Vec2, degrees: f32) -> Vec2 {
    if degrees == 0.0 {
        return v;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Keep rotations in `[0, 360)` so repeated key presses don't drift upward forever.
pub(crate) fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Axis-aligned bounds of a local rectangle `[min, max]` (relative to `anchor`)
/// after rotating it about the anchor.
pub(crate) fn rotated_bounds(anchor: Pos2, min: Vec2, max: Vec2, degrees: f32) -> Rect {
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ]
    .map(|corner| anchor + rotate_vec(corner, degrees));

    calculate_bounds(&corners, 0.0)
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        let v = rotate_vec(Vec2::new(1.0, 0.0), 90.0);
        assert!((v.x - 0.0).abs() < 1e-5);
        assert!((v.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn degrees_wrap_into_one_turn() {
        assert_eq!(normalize_degrees(-5.0), 355.0);
        assert_eq!(normalize_degrees(365.0), 5.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }

    #[test]
    fn bad_factors_are_rejected() {
        assert!(validate_factor(1.1).is_ok());
        assert!(validate_factor(0.0).is_err());
        assert!(validate_factor(-2.0).is_err());
        assert!(validate_factor(f32::NAN).is_err());
    }

    #[test]
    fn rotated_square_grows_its_bounds() {
        let anchor = Pos2::new(0.0, 0.0);
        let flat = rotated_bounds(anchor, Vec2::splat(-1.0), Vec2::splat(1.0), 0.0);
        let tilted = rotated_bounds(anchor, Vec2::splat(-1.0), Vec2::splat(1.0), 45.0);
        assert!((flat.width() - 2.0).abs() < 1e-5);
        assert!(tilted.width() > flat.width());
    }
}
