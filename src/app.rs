use crate::config::JournalPrefs;
use crate::error::SaveResult;
use crate::input::CanvasInput;
use crate::journal::{JournalDate, Mood, SavedEntry};
use crate::panels;
use crate::raster::RasterSurface;
use crate::texture_manager::CanvasTexture;
use crate::tools::ToolController;

/// The journal window: one day's mood, note and drawing
pub struct MoodJournalApp {
    /// Persisted between runs
    prefs: JournalPrefs,
    controller: ToolController,
    note: String,
    today: JournalDate,
    canvas_input: CanvasInput,
    canvas_texture: CanvasTexture,
    /// Result of the last save, shown until dismissed
    message: Option<String>,
}

impl Default for MoodJournalApp {
    fn default() -> Self {
        Self::from_prefs(JournalPrefs::default())
    }
}

impl MoodJournalApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs: JournalPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::from_prefs(prefs)
    }

    pub fn from_prefs(mut prefs: JournalPrefs) -> Self {
        prefs.config = prefs.config.with_env_overrides();
        let controller = ToolController::with_settings(RasterSurface::default(), prefs.tool_settings);
        log::info!("Journal folder: {}", prefs.config.journal_dir.display());

        Self {
            prefs,
            controller,
            note: String::new(),
            today: JournalDate::today(),
            canvas_input: CanvasInput::new(egui::Rect::NOTHING),
            canvas_texture: CanvasTexture::new(),
            message: None,
        }
    }

    pub fn today(&self) -> JournalDate {
        self.today
    }

    pub fn mood(&self) -> Mood {
        self.prefs.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        log::debug!("Mood set to {}", mood);
        self.prefs.mood = mood;
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn note_mut(&mut self) -> &mut String {
        &mut self.note
    }

    pub fn controller(&self) -> &ToolController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToolController {
        &mut self.controller
    }

    pub fn new_canvas(&mut self) {
        self.controller.new_canvas();
    }

    /// Writes today's entry. The outcome is also queued as a message for the user.
    pub fn save_entry(&mut self) -> SaveResult<SavedEntry> {
        let exporter = self.prefs.config.exporter();
        let result = exporter.save_entry(
            &self.today.to_string(),
            self.prefs.mood.label(),
            &self.note,
            self.controller.canvas().image(),
        );

        self.message = Some(match &result {
            Ok(saved) => saved.summary(),
            Err(err) => {
                log::error!("Failed to save journal entry: {}", err);
                err.user_message()
            }
        });
        result
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    /// Feeds this frame's pointer input on the canvas widget to the active tool
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        for event in self.canvas_input.process_input(ctx, canvas) {
            event.dispatch(&mut self.controller);
        }
    }

    /// Texture holding the current canvas, re-uploaded after changes
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.canvas_texture.sync(ctx, &mut self.controller)
    }

    fn show_panels(&mut self, ctx: &egui::Context) {
        panels::mood_panel(self, ctx);
        panels::tools_panel(self, ctx);
        panels::actions_panel(self, ctx);
        panels::note_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_message(ctx);
    }

    fn show_message(&mut self, ctx: &egui::Context) {
        let Some(message) = self.message.clone() else {
            return;
        };
        egui::Window::new("Mood Journal")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.dismiss_message();
                }
            });
    }
}

impl eframe::App for MoodJournalApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.prefs.tool_settings = *self.controller.settings();
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_panels(ctx);
    }
}
