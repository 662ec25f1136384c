use crate::journal::{DEFAULT_JOURNAL_DIR, EntryExporter, Mood};
use crate::tools::ToolSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the journal folder at startup
pub const JOURNAL_DIR_ENV: &str = "MOOD_JOURNAL_DIR";

/// Where journal entries are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct JournalConfig {
    pub journal_dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            journal_dir: PathBuf::from(DEFAULT_JOURNAL_DIR),
        }
    }
}

impl JournalConfig {
    /// Applies `MOOD_JOURNAL_DIR` if it is set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_journal_dir_override(std::env::var_os(JOURNAL_DIR_ENV).map(PathBuf::from))
    }

    fn with_journal_dir_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            log::info!("Journal folder overridden to {}", dir.display());
            self.journal_dir = dir;
        }
        self
    }

    pub fn exporter(&self) -> EntryExporter {
        EntryExporter::new(&self.journal_dir)
    }
}

/// State restored between runs. The drawing and the note are never stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalPrefs {
    pub config: JournalConfig,
    pub mood: Mood,
    pub tool_settings: ToolSettings,
}
