use crate::CanvasApp;

/// The whole window is one canvas: input is handled first, then the frame is painted.
pub fn central_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.max_rect();
            ui.allocate_rect(canvas_rect, egui::Sense::click());

            app.set_canvas_rect(canvas_rect);
            app.handle_input(ctx);

            app.renderer()
                .render(ui.painter(), canvas_rect, app.layout(), &app.model().document);
        });
}
