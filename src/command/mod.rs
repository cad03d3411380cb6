mod commands;

use crate::id_generator::ShapeId;
use crate::shape::ShapeError;

pub use commands::{Command, DUPLICATE_OFFSET};

/// What happened when a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The model changed
    Applied,
    /// Nothing to act on, e.g. an edit with no selection or an eraser miss
    Ignored,
    /// The caller should write the canvas to disk
    ExportRequested,
}

/// Result type for command operations
pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The selection names a shape the document no longer holds
    #[error("selected shape {0} is not in the document")]
    StaleSelection(ShapeId),
}
