use crate::MoodJournalApp;
use crate::journal::Mood;

pub fn mood_panel(app: &mut MoodJournalApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("mood_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Date: {}", app.today()));
            ui.add_space(15.0);

            for mood in Mood::ALL {
                if ui.selectable_label(app.mood() == mood, mood.caption()).clicked() {
                    app.set_mood(mood);
                }
            }
        });
    });
}
