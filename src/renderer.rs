use egui::{FontId, Painter, Rect};

use crate::document::Document;
use crate::layout::CanvasLayout;
use crate::shape::Shape;

/// Paints one frame of the canvas: background, shapes in paint order, then the UI overlay.
#[derive(Debug, Default)]
pub struct Renderer {
    label_font: Option<FontId>,
}

impl Renderer {
    /// Creates a renderer. Without a label font the buttons are drawn unlabeled.
    pub fn new(label_font: Option<FontId>) -> Self {
        Self { label_font }
    }

    pub fn has_labels(&self) -> bool {
        self.label_font.is_some()
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle the canvas occupies; its top-left is canvas (0, 0)
    pub fn render(&self, painter: &Painter, rect: Rect, layout: &CanvasLayout, document: &Document) {
        let offset = rect.min.to_vec2();

        let background = layout.canvas_rect().translate(offset);
        painter.add(egui::Shape::mesh(layout.background.to_mesh(background)));

        for shape in document.shapes() {
            shape.draw(painter, offset);
        }

        self.render_overlay(painter, rect, layout);
    }

    fn render_overlay(&self, painter: &Painter, rect: Rect, layout: &CanvasLayout) {
        let offset = rect.min.to_vec2();
        for swatch in &layout.swatches {
            swatch.show(painter, offset);
        }
        for button in &layout.buttons {
            button.show(painter, offset, self.label_font.as_ref());
        }
    }
}
