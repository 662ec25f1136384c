use eframe::egui;
use crate::tools::{PenColor, ToolKind};

/// Toolbar button for one tool, highlighted while the tool is active
pub struct ToolButton {
    pub tool: ToolKind,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ToolKind, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let text = format!("{} {}", self.tool.icon(), self.tool.name());
        ui.add(egui::SelectableLabel::new(self.selected, text))
            .on_hover_text(self.tool.name())
    }
}

/// Square palette button filled with a pen color
pub struct ColorSwatch {
    pub color: PenColor,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: PenColor, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(28.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 4.0, self.color.color());

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::from_gray(160))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(90))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(format!("{} Pen", self.color.name()))
    }
}
