//! Off-screen rendering of the canvas to an image file.
//!
//! The export holds the background and every shape in paint order. The UI
//! overlay is never part of it.

use std::path::Path;

use egui::Color32;
use image::{Rgba, RgbaImage};
use thiserror::Error;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::document::Document;
use crate::layout::CanvasLayout;
use crate::shape::{OUTLINE_COLOR, OUTLINE_THICKNESS, Shape, ShapeType};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("canvas size {width}x{height} cannot be rendered")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Rasterize the background and all shapes at the layout's pixel size
pub fn render_canvas(layout: &CanvasLayout, document: &Document) -> Result<RgbaImage, ExportError> {
    let (width, height) = layout.pixel_size();
    let invalid = || ExportError::InvalidSize { width, height };
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let mut img = RgbaImage::from_fn(width, height, |x, y| {
        let u = (x as f32 + 0.5) / width as f32;
        let v = (y as f32 + 0.5) / height as f32;
        Rgba(layout.background.color_at(u, v).to_array())
    });

    let size = tiny_skia::IntSize::from_wh(width, height).ok_or_else(invalid)?;
    let mut pixmap = Pixmap::from_vec(img.as_raw().clone(), size).ok_or_else(invalid)?;

    for shape in document.shapes() {
        draw_shape(&mut pixmap, shape);
    }

    img.copy_from_slice(pixmap.data());
    Ok(img)
}

/// Render the canvas and write it as PNG to `path`
pub fn save_canvas(
    layout: &CanvasLayout,
    document: &Document,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let img = render_canvas(layout, document)?;
    img.save(path).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Saved canvas with {} shapes to {}", document.len(), path.display());
    Ok(())
}

fn draw_shape(pixmap: &mut Pixmap, shape: &ShapeType) {
    let path = match shape {
        ShapeType::Circle(circle) => {
            let center = circle.center();
            PathBuilder::from_circle(center.x, center.y, circle.radius())
        }
        ShapeType::Rectangle(_) | ShapeType::Triangle(_) => polygon_path(&shape.vertices()),
    };
    let Some(path) = path else {
        log::warn!("Skipping degenerate {} {} in export", shape.kind().name(), shape.id());
        return;
    };

    pixmap.fill_path(&path, &paint(shape.color()), FillRule::Winding, Transform::identity(), None);

    let outline = Stroke {
        width: OUTLINE_THICKNESS,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint(OUTLINE_COLOR), &outline, Transform::identity(), None);
}

fn polygon_path(points: &[egui::Pos2]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    pb.close();
    pb.finish()
}

fn paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}
