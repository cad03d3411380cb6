//! Four-corner background gradient shared by the window and the exporter.

use egui::{Color32, Mesh, Pos2, Rect};

/// Corner colors of a gradient laid out as a two-triangle strip.
///
/// The strip splits the rectangle along the top-right to bottom-left diagonal,
/// so colors are interpolated within `(TL, TR, BL)` and `(TR, BL, BR)`. A GPU
/// draws the window mesh the same way, which keeps exports and the screen in
/// agreement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub top_left: Color32,
    pub top_right: Color32,
    pub bottom_left: Color32,
    pub bottom_right: Color32,
}

impl Gradient {
    /// Top edge one color, bottom edge another.
    pub const fn vertical(top: Color32, bottom: Color32) -> Self {
        Self {
            top_left: top,
            top_right: top,
            bottom_left: bottom,
            bottom_right: bottom,
        }
    }

    /// Color at normalized coordinates `u` (left to right) and `v` (top to bottom).
    pub fn color_at(&self, u: f32, v: f32) -> Color32 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let weights = if u + v <= 1.0 {
            [(self.top_left, 1.0 - u - v), (self.top_right, u), (self.bottom_left, v)]
        } else {
            [
                (self.bottom_right, u + v - 1.0),
                (self.top_right, 1.0 - v),
                (self.bottom_left, 1.0 - u),
            ]
        };

        let mut channels = [0.0f32; 4];
        for (color, weight) in weights {
            for (channel, value) in channels.iter_mut().zip(color.to_array()) {
                *channel += value as f32 * weight;
            }
        }
        let [r, g, b, a] = channels.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Build the mesh that paints this gradient over `rect`
    pub fn to_mesh(&self, rect: Rect) -> Mesh {
        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), self.top_left);
        mesh.colored_vertex(rect.right_top(), self.top_right);
        mesh.colored_vertex(rect.left_bottom(), self.bottom_left);
        mesh.colored_vertex(Pos2::new(rect.right(), rect.bottom()), self.bottom_right);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }
}
