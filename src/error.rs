use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving a journal entry to disk
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not create journal folder {}: {source}", .path.display())]
    FolderCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write note file {}: {source}", .path.display())]
    TextWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write drawing {}: {source}", .path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for save operations
pub type SaveResult<T> = Result<T, SaveError>;

impl SaveError {
    /// Path of the file or folder that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FolderCreation { path, .. }
            | Self::TextWrite { path, .. }
            | Self::ImageEncode { path, .. } => path,
        }
    }

    /// Message suitable for showing in a dialog
    pub fn user_message(&self) -> String {
        format!("Error saving: {}", self)
    }
}
