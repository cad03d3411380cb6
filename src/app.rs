use egui::{FontId, Rect};

use crate::command::{CommandOutcome, CommandResult};
use crate::config::CanvasConfig;
use crate::export::{self, ExportError};
use crate::fonts;
use crate::input::{InputEvent, InputHandler, route_event};
use crate::layout::CanvasLayout;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorModel;

pub struct CanvasApp {
    config: CanvasConfig,
    layout: CanvasLayout,
    model: EditorModel,
    renderer: Renderer,
    input: InputHandler,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        let label_font = match fonts::install_label_font(&cc.egui_ctx, &config.font_path) {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("{err}; buttons will be unlabeled");
                None
            }
        };
        Self::with_label_font(config, label_font)
    }

    /// Build the app without touching a GPU context
    pub fn with_label_font(config: CanvasConfig, label_font: Option<FontId>) -> Self {
        let layout = CanvasLayout::new(config.layout);
        log::info!(
            "Starting {:?} layout at {}x{}",
            layout.variant,
            layout.size.x,
            layout.size.y
        );
        Self {
            model: EditorModel::new(layout.defaults),
            layout,
            config,
            renderer: Renderer::new(label_font),
            input: InputHandler::new(),
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.input.set_canvas_rect(rect);
    }

    /// Drain this frame's pointer and key presses into commands
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        for event in self.input.process_input(ctx) {
            self.handle_event(&event);
        }
    }

    /// Route one event and run the resulting command. Errors are logged, never fatal.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<CommandResult> {
        let command = route_event(event, &self.layout, &self.model)?;
        let result = command.execute(&mut self.model);

        match &result {
            Ok(CommandOutcome::ExportRequested) => {
                if let Err(err) = self.export() {
                    log::error!("Export failed: {err}");
                }
            }
            Ok(_) => {}
            Err(err) => log::error!("{:?} failed: {err}", command),
        }

        Some(result)
    }

    /// Write the canvas (background and shapes, no UI) to the configured path
    pub fn export(&self) -> Result<(), ExportError> {
        export::save_canvas(&self.layout, &self.model.document, &self.config.export_path)
    }
}

impl eframe::App for CanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::central_panel(self, ctx);
    }
}
