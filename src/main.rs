#![warn(clippy::all, rust_2018_idioms)]

use artistic_canvas::{CanvasApp, CanvasConfig, CanvasLayout};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CanvasConfig::discover();
    let layout = CanvasLayout::new(config.layout);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(layout.size)
            .with_resizable(false),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(CanvasApp::new(cc, config)))),
    )
}
