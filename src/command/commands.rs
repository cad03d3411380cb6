use egui::{Color32, Pos2, Vec2};

use super::{CommandError, CommandOutcome, CommandResult};
use crate::document::Document;
use crate::id_generator::{ShapeId, generate_id};
use crate::palette;
use crate::shape::{Shape, ShapeKind, ShapeType};
use crate::state::EditorModel;
use crate::tools::Tool;

/// How far a duplicate lands from its source
pub const DUPLICATE_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Operations on the editor model
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the active tool and drop the selection
    SetTool(Tool),

    /// Change the active color, recoloring the selected shape if there is one
    SetColor(Color32),

    /// Place a new shape with the default size and current color, and select it
    CreateShape { kind: ShapeKind, pos: Pos2 },

    /// Remove the first shape in paint order whose bounds contain `pos`
    EraseAt(Pos2),

    ResizeSelected(f32),
    TranslateSelected(Vec2),
    RotateSelected(f32),
    DeleteSelected,

    /// Draw the selected shape on top of everything else
    BringToFront,

    /// Draw the selected shape underneath everything else
    SendToBack,

    /// Copy the selected shape, offset it by [`DUPLICATE_OFFSET`] and select the copy
    DuplicateSelected,

    /// Replace the selected shape's fill with its inverse
    InvertSelectedColor,

    /// Remove every shape
    Clear,

    /// Write the canvas to an image file
    Export,
}

impl Command {
    /// Execute the command against the model
    pub fn execute(&self, model: &mut EditorModel) -> CommandResult {
        log::debug!("Executing {:?}", self);

        match self {
            Command::SetTool(tool) => {
                model.tools.tool = *tool;
                model.state.clear();
                Ok(CommandOutcome::Applied)
            }

            Command::SetColor(color) => {
                model.tools.color = *color;
                if let Some(shape) = model.selected_shape_mut() {
                    shape.set_color(*color);
                }
                Ok(CommandOutcome::Applied)
            }

            Command::CreateShape { kind, pos } => {
                let shape = model.defaults.instantiate(*kind, *pos, model.tools.color);
                let id = model.document.add(shape);
                model.state.select(id);
                log::debug!("Created {} {} at {:?}", kind.name(), id, pos);
                Ok(CommandOutcome::Applied)
            }

            Command::EraseAt(pos) => match model.document.first_at(*pos) {
                Some(id) => {
                    model.document.remove(id);
                    model.state.forget(id);
                    log::debug!("Erased {}", id);
                    Ok(CommandOutcome::Applied)
                }
                None => Ok(CommandOutcome::Ignored),
            },

            Command::ResizeSelected(factor) => with_selected(model, |shape| {
                shape.resize(*factor)?;
                Ok(())
            }),

            Command::TranslateSelected(delta) => with_selected(model, |shape| {
                shape.translate(*delta);
                Ok(())
            }),

            Command::RotateSelected(degrees) => with_selected(model, |shape| {
                shape.rotate(*degrees);
                Ok(())
            }),

            Command::DeleteSelected => {
                let Some(id) = model.state.selected() else {
                    return Ok(CommandOutcome::Ignored);
                };
                model.state.clear();
                match model.document.remove(id) {
                    Some(_) => Ok(CommandOutcome::Applied),
                    None => Err(CommandError::StaleSelection(id)),
                }
            }

            Command::BringToFront => reorder_selected(model, |doc, id| doc.move_to_front(id)),

            Command::SendToBack => reorder_selected(model, |doc, id| doc.move_to_back(id)),

            Command::DuplicateSelected => {
                let Some(id) = model.state.selected() else {
                    return Ok(CommandOutcome::Ignored);
                };
                let source = model.document.get(id).ok_or(CommandError::StaleSelection(id))?;
                let mut copy = source.duplicate(generate_id());
                copy.translate(DUPLICATE_OFFSET);
                let copy_id = model.document.add(copy);
                model.state.select(copy_id);
                log::debug!("Duplicated {} as {}", id, copy_id);
                Ok(CommandOutcome::Applied)
            }

            Command::InvertSelectedColor => with_selected(model, |shape| {
                shape.set_color(palette::invert(shape.color()));
                Ok(())
            }),

            Command::Clear => {
                model.document.clear();
                model.state.clear();
                Ok(CommandOutcome::Applied)
            }

            Command::Export => Ok(CommandOutcome::ExportRequested),
        }
    }
}

fn with_selected(
    model: &mut EditorModel,
    edit: impl FnOnce(&mut ShapeType) -> Result<(), CommandError>,
) -> CommandResult {
    let Some(id) = model.state.selected() else {
        return Ok(CommandOutcome::Ignored);
    };
    let shape = model.document.get_mut(id).ok_or(CommandError::StaleSelection(id))?;
    edit(shape)?;
    Ok(CommandOutcome::Applied)
}

fn reorder_selected(
    model: &mut EditorModel,
    reorder: impl FnOnce(&mut Document, ShapeId) -> bool,
) -> CommandResult {
    let Some(id) = model.state.selected() else {
        return Ok(CommandOutcome::Ignored);
    };
    if reorder(&mut model.document, id) {
        Ok(CommandOutcome::Applied)
    } else {
        Err(CommandError::StaleSelection(id))
    }
}
