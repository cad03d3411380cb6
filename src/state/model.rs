use egui::Color32;

use super::EditorState;
use crate::document::Document;
use crate::palette;
use crate::shape::ShapeType;
use crate::tools::{ShapeDefaults, Tool};

/// Active creation tool and fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: palette::DEFAULT_COLOR,
        }
    }
}

/// Everything the event path mutates: shapes, selection and tool state.
#[derive(Debug, Clone, Default)]
pub struct EditorModel {
    pub document: Document,
    pub state: EditorState,
    pub tools: ToolState,
    pub defaults: ShapeDefaults,
}

impl EditorModel {
    pub fn new(defaults: ShapeDefaults) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    pub fn selected_shape(&self) -> Option<&ShapeType> {
        self.state.selected().and_then(|id| self.document.get(id))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut ShapeType> {
        let id = self.state.selected()?;
        self.document.get_mut(id)
    }

    pub fn has_selection(&self) -> bool {
        self.selected_shape().is_some()
    }
}
