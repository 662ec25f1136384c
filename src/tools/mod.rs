use crate::geometry::ShapeKind;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

mod controller;
pub use controller::ToolController;

mod stroke_session;
pub use stroke_session::StrokeSession;

pub const PEN_SIZE_RANGE: RangeInclusive<u32> = 2..=30;
pub const PEN_SIZE_STEP: u32 = 2;
pub const ERASER_SIZE_RANGE: RangeInclusive<u32> = 6..=50;
pub const ERASER_SIZE_STEP: u32 = 4;
pub const SHAPE_SIZE_RANGE: RangeInclusive<u32> = 16..=120;
pub const SHAPE_SIZE_STEP: u32 = 8;

/// The closed set of canvas tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Heart,
    Star,
    Oval,
    Fill,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Heart,
        ToolKind::Star,
        ToolKind::Oval,
        ToolKind::Fill,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Heart => "Heart",
            Self::Star => "Star",
            Self::Oval => "Oval",
            Self::Fill => "Paint Bucket",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pen => "✏",
            Self::Eraser => "⌫",
            Self::Heart => "♥",
            Self::Star => "★",
            Self::Oval => "◯",
            Self::Fill => "🎨",
        }
    }

    /// Shape stamped by this tool, if it is a stamp tool
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            Self::Heart => Some(ShapeKind::Heart),
            Self::Star => Some(ShapeKind::Star),
            Self::Oval => Some(ShapeKind::Oval),
            _ => None,
        }
    }

    /// Pen and eraser paint continuously while dragging
    pub fn is_stroke(&self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }
}

/// Colors offered in the pen palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenColor {
    Black,
    Red,
    Green,
    Blue,
    Orange,
    Purple,
    Pink,
}

impl PenColor {
    pub const ALL: [PenColor; 7] = [
        PenColor::Black,
        PenColor::Red,
        PenColor::Green,
        PenColor::Blue,
        PenColor::Orange,
        PenColor::Purple,
        PenColor::Pink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Black => Color32::from_rgb(0, 0, 0),
            Self::Red => Color32::from_rgb(255, 0, 0),
            Self::Green => Color32::from_rgb(0, 255, 0),
            Self::Blue => Color32::from_rgb(0, 0, 255),
            Self::Orange => Color32::from_rgb(255, 200, 0),
            Self::Purple => Color32::from_rgb(128, 0, 128),
            Self::Pink => Color32::from_rgb(255, 175, 175),
        }
    }
}

/// Drawing parameters shared by all tools. They survive tool switches and
/// canvas resets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pen_color: Color32,
    pen_size: u32,
    eraser_size: u32,
    shape_size: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            pen_color: Color32::BLACK,
            pen_size: 12,
            eraser_size: 42,
            shape_size: 36,
        }
    }
}

impl ToolSettings {
    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn pen_size(&self) -> u32 {
        self.pen_size
    }

    pub fn eraser_size(&self) -> u32 {
        self.eraser_size
    }

    pub fn shape_size(&self) -> u32 {
        self.shape_size
    }

    /// Pen colors are always opaque
    pub fn set_pen_color(&mut self, color: Color32) {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        self.pen_color = Color32::from_rgb(r, g, b);
    }

    pub fn set_pen_size(&mut self, size: u32) {
        self.pen_size = clamp_to(size, &PEN_SIZE_RANGE);
    }

    pub fn set_eraser_size(&mut self, size: u32) {
        self.eraser_size = clamp_to(size, &ERASER_SIZE_RANGE);
    }

    pub fn set_shape_size(&mut self, size: u32) {
        self.shape_size = clamp_to(size, &SHAPE_SIZE_RANGE);
    }

    pub fn increase_pen_size(&mut self) {
        self.set_pen_size(self.pen_size + PEN_SIZE_STEP);
    }

    pub fn decrease_pen_size(&mut self) {
        self.set_pen_size(self.pen_size.saturating_sub(PEN_SIZE_STEP));
    }

    pub fn increase_eraser_size(&mut self) {
        self.set_eraser_size(self.eraser_size + ERASER_SIZE_STEP);
    }

    pub fn decrease_eraser_size(&mut self) {
        self.set_eraser_size(self.eraser_size.saturating_sub(ERASER_SIZE_STEP));
    }

    pub fn increase_shape_size(&mut self) {
        self.set_shape_size(self.shape_size + SHAPE_SIZE_STEP);
    }

    pub fn decrease_shape_size(&mut self) {
        self.set_shape_size(self.shape_size.saturating_sub(SHAPE_SIZE_STEP));
    }

    /// Re-applies the clamps, e.g. after loading persisted values
    pub fn sanitized(mut self) -> Self {
        let Self { pen_color, pen_size, eraser_size, shape_size } = self;
        self.set_pen_color(pen_color);
        self.set_pen_size(pen_size);
        self.set_eraser_size(eraser_size);
        self.set_shape_size(shape_size);
        self
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ToolSettings::default();
        assert_eq!(settings.pen_color(), Color32::BLACK);
        assert_eq!(settings.pen_size(), 12);
        assert_eq!(settings.eraser_size(), 42);
        assert_eq!(settings.shape_size(), 36);
    }

    #[test]
    fn test_sizes_are_clamped() {
        let mut settings = ToolSettings::default();
        settings.set_pen_size(0);
        assert_eq!(settings.pen_size(), 2);
        settings.set_pen_size(99);
        assert_eq!(settings.pen_size(), 30);
        settings.set_eraser_size(1);
        assert_eq!(settings.eraser_size(), 6);
        settings.set_eraser_size(51);
        assert_eq!(settings.eraser_size(), 50);
        settings.set_shape_size(8);
        assert_eq!(settings.shape_size(), 16);
        settings.set_shape_size(500);
        assert_eq!(settings.shape_size(), 120);
    }

    #[test]
    fn test_steps_stop_at_limits() {
        let mut settings = ToolSettings::default();
        for _ in 0..20 {
            settings.increase_pen_size();
            settings.increase_eraser_size();
            settings.decrease_shape_size();
        }
        assert_eq!(settings.pen_size(), 30);
        assert_eq!(settings.eraser_size(), 50);
        assert_eq!(settings.shape_size(), 16);

        settings.decrease_eraser_size();
        assert_eq!(settings.eraser_size(), 46);
        settings.increase_shape_size();
        assert_eq!(settings.shape_size(), 24);
    }

    #[test]
    fn test_pen_color_drops_alpha() {
        let mut settings = ToolSettings::default();
        settings.set_pen_color(Color32::from_rgba_unmultiplied(10, 20, 30, 40));
        assert_eq!(settings.pen_color(), Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_only_stamp_tools_have_shapes() {
        let stamps: Vec<_> = ToolKind::ALL.iter().filter_map(|t| t.shape()).collect();
        assert_eq!(stamps, vec![ShapeKind::Heart, ShapeKind::Star, ShapeKind::Oval]);
        assert!(ToolKind::Pen.is_stroke());
        assert!(ToolKind::Eraser.is_stroke());
        assert!(!ToolKind::Fill.is_stroke());
    }

    #[test]
    fn test_settings_survive_serialization() {
        let mut settings = ToolSettings::default();
        settings.set_pen_color(PenColor::Purple.color());
        settings.set_shape_size(64);

        let json = serde_json::to_string(&settings).unwrap();
        let restored: ToolSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
