use crate::MoodJournalApp;

pub fn central_panel(app: &mut MoodJournalApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.strong("Draw your mood!");

        let canvas = app.controller().canvas();
        let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
        let (canvas_rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        // Handle input
        app.handle_canvas_input(ctx, &response);

        // Render the canvas
        let texture = app.canvas_texture(ctx);
        ui.painter().image(
            texture,
            canvas_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    });
}
