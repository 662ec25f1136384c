use crate::MoodJournalApp;

pub fn note_panel(app: &mut MoodJournalApp, ctx: &egui::Context) {
    egui::SidePanel::left("note_panel")
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.strong("Your Note");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(app.note_mut()).desired_width(f32::INFINITY),
                );
            });
        });
}

pub fn actions_panel(app: &mut MoodJournalApp, ctx: &egui::Context) {
    egui::SidePanel::right("actions_panel")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() / 2.0 - 30.0).max(0.0));
                if ui.button("Save Today's Mood").clicked() {
                    match app.save_entry() {
                        Ok(saved) => log::debug!("Entry saved to {}", saved.text_path.display()),
                        Err(err) => log::debug!("Save failed at {}", err.path().display()),
                    }
                }
                ui.add_space(15.0);
                if ui.button("New Canvas").clicked() {
                    app.new_canvas();
                }
            });
        });
}
