mod editor_state;
mod model;

pub use editor_state::EditorState;
pub use model::{EditorModel, ToolState};
