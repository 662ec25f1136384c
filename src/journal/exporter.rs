use super::{JournalEntry, file_stamp};
use crate::error::{SaveError, SaveResult};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Default folder, relative to the working directory
pub const DEFAULT_JOURNAL_DIR: &str = "PersonalJournal";

/// Paths written by a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub text_path: PathBuf,
    pub image_path: PathBuf,
}

impl SavedEntry {
    /// Message suitable for showing in a dialog
    pub fn summary(&self) -> String {
        format!(
            "Saved!\nText: {}\nDrawing: {}",
            self.text_path.display(),
            self.image_path.display()
        )
    }
}

/// Writes a day's note and drawing into the journal folder
#[derive(Debug, Clone)]
pub struct EntryExporter {
    folder: PathBuf,
}

impl Default for EntryExporter {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNAL_DIR)
    }
}

impl EntryExporter {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn text_path(&self, date: &str) -> PathBuf {
        self.folder.join(format!("MoodJournal_{}.doc", file_stamp(date)))
    }

    pub fn image_path(&self, date: &str) -> PathBuf {
        self.folder.join(format!("MoodDrawing_{}.png", file_stamp(date)))
    }

    /// Saves the entry as `MoodJournal_<stamp>.doc` plus `MoodDrawing_<stamp>.png`.
    ///
    /// Existing files for the same day are overwritten. Nothing in memory is
    /// touched, whatever the outcome.
    pub fn save(&self, entry: &JournalEntry, drawing: &RgbaImage) -> SaveResult<SavedEntry> {
        fs::create_dir_all(&self.folder).map_err(|source| SaveError::FolderCreation {
            path: self.folder.clone(),
            source,
        })?;

        let text_path = self.text_path(&entry.date);
        fs::write(&text_path, entry.render_text()).map_err(|source| SaveError::TextWrite {
            path: text_path.clone(),
            source,
        })?;

        let image_path = self.image_path(&entry.date);
        drawing
            .save_with_format(&image_path, ImageFormat::Png)
            .map_err(|source| SaveError::ImageEncode {
                path: image_path.clone(),
                source,
            })?;

        log::info!(
            "Saved journal entry for {} to {}",
            entry.date,
            self.folder.display()
        );
        Ok(SavedEntry {
            text_path,
            image_path,
        })
    }

    /// Convenience wrapper taking the raw strings from the UI
    pub fn save_entry(
        &self,
        date: &str,
        mood: &str,
        note: &str,
        drawing: &RgbaImage,
    ) -> SaveResult<SavedEntry> {
        self.save(&JournalEntry::new(date, mood, note), drawing)
    }
}
