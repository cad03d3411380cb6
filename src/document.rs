use egui::Pos2;

use crate::id_generator::ShapeId;
use crate::shape::{Shape, ShapeType};

/// The shapes on the canvas, in paint order (back to front).
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<ShapeType>,
}

impl Document {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape on top of everything else
    pub fn add(&mut self, shape: ShapeType) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    pub fn shapes(&self) -> &[ShapeType] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id() == id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeType> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// First shape in paint order whose bounds contain `pos`.
    ///
    /// Note this is the bottom-most hit, not the one drawn on top.
    pub fn first_at(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|shape| shape.contains(pos))
            .map(|shape| shape.id())
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeType> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Move a shape to the end of the paint order so it draws on top.
    /// Returns false if the shape is not in this document.
    pub fn move_to_front(&mut self, id: ShapeId) -> bool {
        match self.remove(id) {
            Some(shape) => {
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Move a shape to the start of the paint order so it draws underneath.
    pub fn move_to_back(&mut self, id: ShapeId) -> bool {
        match self.remove(id) {
            Some(shape) => {
                self.shapes.insert(0, shape);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
