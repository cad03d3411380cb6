use egui::PointerButton;

use super::{Action, InputEvent};
use crate::command::Command;
use crate::components::ButtonAction;
use crate::layout::CanvasLayout;
use crate::state::EditorModel;

/// Decide which command, if any, an input event maps to.
///
/// Clicks are tested against the palette first, then the buttons, and only
/// then land on the canvas. Key presses that edit the selection are dropped
/// when nothing is selected.
pub fn route_event(event: &InputEvent, layout: &CanvasLayout, model: &EditorModel) -> Option<Command> {
    match event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Primary,
        } => {
            if let Some(swatch) = layout.swatch_at(*position) {
                return Some(Command::SetColor(swatch.color));
            }
            if let Some(button) = layout.button_at(*position) {
                return Some(button_command(button.action));
            }
            Some(match model.tools.tool.shape_kind() {
                Some(kind) => Command::CreateShape { kind, pos: *position },
                None => Command::EraseAt(*position),
            })
        }
        InputEvent::PointerDown { .. } => None,
        InputEvent::KeyDown { key, modifiers } => {
            let action = layout.keymap.lookup(*key, *modifiers)?;
            if action.requires_selection() && !model.has_selection() {
                log::trace!("Ignoring {:?}: nothing selected", action);
                return None;
            }
            Some(action_command(action))
        }
    }
}

fn button_command(action: ButtonAction) -> Command {
    match action {
        ButtonAction::SelectTool(tool) => Command::SetTool(tool),
        ButtonAction::Clear => Command::Clear,
        ButtonAction::Duplicate => Command::DuplicateSelected,
        ButtonAction::Invert => Command::InvertSelectedColor,
        ButtonAction::Export => Command::Export,
    }
}

fn action_command(action: Action) -> Command {
    match action {
        Action::SelectTool(tool) => Command::SetTool(tool),
        Action::SelectColor(color) => Command::SetColor(color),
        Action::Resize(factor) => Command::ResizeSelected(factor),
        Action::Move(delta) => Command::TranslateSelected(delta),
        Action::Rotate(degrees) => Command::RotateSelected(degrees),
        Action::Delete => Command::DeleteSelected,
        Action::BringToFront => Command::BringToFront,
        Action::SendToBack => Command::SendToBack,
        Action::Duplicate => Command::DuplicateSelected,
        Action::Invert => Command::InvertSelectedColor,
        Action::Export => Command::Export,
    }
}
