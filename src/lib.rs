#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod flood_fill;
pub mod geometry;
pub mod input;
pub mod journal;
pub mod panels;
pub mod raster;
pub mod texture_manager;
pub mod tools;

pub use app::MoodJournalApp;
pub use config::{JournalConfig, JournalPrefs};
pub use error::{SaveError, SaveResult};
pub use geometry::{ShapeKind, ShapeOutline};
pub use input::{CanvasEvent, CanvasInput};
pub use journal::{EntryExporter, JournalDate, JournalEntry, Mood, SavedEntry};
pub use raster::{BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, RasterSurface};
pub use tools::{PenColor, ToolController, ToolKind, ToolSettings};
