mod swatch;
mod tool_button;

pub use swatch::{SWATCH_SIZE, Swatch};
pub use tool_button::{BUTTON_SIZE, ButtonAction, LABEL_COLOR, LABEL_SIZE, ToolButton};
