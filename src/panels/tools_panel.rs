use crate::MoodJournalApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::tools::{PenColor, ToolKind};

/// Bottom toolbar: pen palette, sizes, stamps and the paint bucket
pub fn tools_panel(app: &mut MoodJournalApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let controller = app.controller_mut();
            let active = controller.active_tool();

            // Pen group
            for color in PenColor::ALL {
                let selected = active == ToolKind::Pen && controller.settings().pen_color() == color.color();
                if ColorSwatch::new(color, selected).show(ui).clicked() {
                    controller.pick_palette_color(color);
                }
            }
            let settings = controller.settings_mut();
            ui.strong(format!("Pen Size: {}", settings.pen_size()));
            if ui.small_button("+").clicked() {
                settings.increase_pen_size();
            }
            if ui.small_button("-").clicked() {
                settings.decrease_pen_size();
            }
            ui.separator();

            // Eraser group
            if ToolButton::new(ToolKind::Eraser, active == ToolKind::Eraser).show(ui).clicked() {
                controller.select_tool(ToolKind::Eraser);
            }
            let settings = controller.settings_mut();
            ui.strong(format!("Eraser Size: {}", settings.eraser_size()));
            if ui.small_button("+").clicked() {
                settings.increase_eraser_size();
            }
            if ui.small_button("-").clicked() {
                settings.decrease_eraser_size();
            }
            ui.separator();

            // Shape group
            let settings = controller.settings_mut();
            ui.strong(format!("Shape Size: {}", settings.shape_size()));
            if ui.small_button("+").clicked() {
                settings.increase_shape_size();
            }
            if ui.small_button("-").clicked() {
                settings.decrease_shape_size();
            }
            for tool in [ToolKind::Heart, ToolKind::Star, ToolKind::Oval] {
                if ToolButton::new(tool, active == tool).show(ui).clicked() {
                    controller.select_tool(tool);
                }
            }
            ui.separator();

            if ToolButton::new(ToolKind::Fill, active == ToolKind::Fill).show(ui).clicked() {
                controller.select_tool(ToolKind::Fill);
            }
        });
    });
}
