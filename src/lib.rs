#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod export;
pub mod fonts;
pub mod id_generator;
pub mod input;
pub mod layout;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::CanvasApp;
pub use command::{Command, CommandError, CommandOutcome};
pub use config::CanvasConfig;
pub use document::Document;
pub use input::{InputEvent, InputHandler};
pub use layout::{CanvasLayout, LayoutVariant};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeType};
pub use state::{EditorModel, EditorState};
pub use tools::Tool;
