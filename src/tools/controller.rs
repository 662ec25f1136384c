use super::{PenColor, StrokeSession, ToolKind, ToolSettings};
use crate::geometry::shapes;
use crate::raster::{BACKGROUND, RasterSurface};
use egui::{Color32, Pos2};
use image::RgbaImage;

/// Owns the canvas and turns tool selection plus pointer events into
/// drawing operations.
///
/// Tool switches only happen through [`ToolController::select_tool`]; drawing
/// never changes the active tool. Every call that touches the canvas leaves a
/// redraw request behind for the UI to pick up.
#[derive(Debug)]
pub struct ToolController {
    canvas: RasterSurface,
    active_tool: ToolKind,
    settings: ToolSettings,
    stroke: Option<StrokeSession>,
    redraw_requested: bool,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(RasterSurface::default())
    }
}

impl ToolController {
    pub fn new(canvas: RasterSurface) -> Self {
        Self::with_settings(canvas, ToolSettings::default())
    }

    pub fn with_settings(canvas: RasterSurface, settings: ToolSettings) -> Self {
        Self {
            canvas,
            active_tool: ToolKind::default(),
            settings: settings.sanitized(),
            stroke: None,
            redraw_requested: true,
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn canvas(&self) -> &RasterSurface {
        &self.canvas
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        if tool != self.active_tool {
            log::debug!("Tool changed: {} -> {}", self.active_tool.name(), tool.name());
        }
        self.active_tool = tool;
        self.stroke = None;
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.settings.set_pen_color(color);
    }

    /// Palette buttons set the color and switch back to the pen
    pub fn pick_palette_color(&mut self, color: PenColor) {
        self.set_pen_color(color.color());
        self.select_tool(ToolKind::Pen);
    }

    pub fn set_pen_size(&mut self, size: u32) {
        self.settings.set_pen_size(size);
    }

    pub fn set_eraser_size(&mut self, size: u32) {
        self.settings.set_eraser_size(size);
    }

    pub fn set_shape_size(&mut self, size: u32) {
        self.settings.set_shape_size(size);
    }

    /// Pointer pressed over the canvas at canvas-local `pos`
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        let color = self.settings.pen_color();
        if self.active_tool.is_stroke() {
            self.stroke = Some(StrokeSession::new(pos));
        } else if let Some(kind) = self.active_tool.shape() {
            let outline = shapes::outline(kind, pos, self.settings.shape_size() as f32);
            log::debug!("Stamping {:?} at {:?}", kind, pos);
            self.canvas.fill_shape(&outline, color);
            self.request_redraw();
        } else {
            let report = self.canvas.flood_fill(pos, color);
            log::debug!("Flood fill at {:?} recolored {} pixels", pos, report.changed);
            if !report.is_noop() {
                self.request_redraw();
            }
        }
    }

    /// Pointer dragged to canvas-local `pos` with the button held
    pub fn on_pointer_drag(&mut self, pos: Pos2) {
        let (color, width) = match self.active_tool {
            ToolKind::Pen => (self.settings.pen_color(), self.settings.pen_size()),
            ToolKind::Eraser => (BACKGROUND, self.settings.eraser_size()),
            _ => return,
        };

        if let Some(session) = self.stroke.as_mut() {
            let (from, to) = session.advance(pos);
            self.canvas.stroke_line(from, to, color, width as f32);
            self.request_redraw();
        } else {
            // Drag entered the canvas without a press on it
            self.stroke = Some(StrokeSession::new(pos));
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.stroke = None;
    }

    /// Blank canvas; tool and drawing settings are kept
    pub fn new_canvas(&mut self) {
        self.canvas.clear(BACKGROUND);
        self.stroke = None;
        self.request_redraw();
        log::debug!("Canvas cleared");
    }

    pub fn snapshot(&self) -> RgbaImage {
        self.canvas.snapshot()
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns true once per batch of canvas changes
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
