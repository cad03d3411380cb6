//! Selection state machine for the canvas.
//!
//! ```text
//!   ┌──────┐  create / duplicate   ┌───────────────┐
//!   │ Idle ├──────────────────────►│ ShapeSelected │◄──┐ create / duplicate
//!   │      │◄──────────────────────┤               ├───┘
//!   └──────┘  delete / erase /     └───────────────┘
//!             clear / tool switch
//! ```
//!
//! Picking a color recolors the selection instead of dropping it.

use crate::id_generator::ShapeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Nothing is selected; keyboard editing commands are ignored
    #[default]
    Idle,
    /// Keyboard editing commands apply to this shape
    ShapeSelected { id: ShapeId },
}

impl EditorState {
    pub fn select(&mut self, id: ShapeId) {
        *self = EditorState::ShapeSelected { id };
    }

    pub fn clear(&mut self) {
        *self = EditorState::Idle;
    }

    /// Returns the selected shape, if any
    pub fn selected(&self) -> Option<ShapeId> {
        match self {
            EditorState::ShapeSelected { id } => Some(*id),
            EditorState::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected() == Some(id)
    }

    /// Drop the selection if it points at `id`
    pub fn forget(&mut self, id: ShapeId) {
        if self.is_selected(id) {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    #[test]
    fn forget_only_clears_matching_selection() {
        let a = generate_id();
        let b = generate_id();
        let mut state = EditorState::default();
        assert!(state.is_idle());

        state.select(a);
        state.forget(b);
        assert_eq!(state.selected(), Some(a));

        state.forget(a);
        assert!(state.is_idle());
    }
}
