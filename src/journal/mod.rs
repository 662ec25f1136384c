use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod exporter;
pub use exporter::{DEFAULT_JOURNAL_DIR, EntryExporter, SavedEntry};

/// How the day went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Happy,
    Okay,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Okay, Mood::Sad];

    /// Label written to the journal file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Okay => "Okay",
            Self::Sad => "Sad",
        }
    }

    /// Button caption
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Happy => "😊 Happy",
            Self::Okay => "😐 Okay",
            Self::Sad => "😢 Sad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a date as MM/DD/YYYY, got {0:?}")]
pub struct DateParseError(String);

/// Calendar day an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JournalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JournalDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today in the local time zone
    pub fn today() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    /// `MM-DD-YYYY`, safe to use in file names
    pub fn file_stamp(&self) -> String {
        file_stamp(&self.to_string())
    }
}

impl From<NaiveDate> for JournalDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for JournalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

impl FromStr for JournalDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateParseError(s.to_owned());
        let mut parts = s.split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };

        let month: u32 = month.parse().map_err(|_| err())?;
        let day: u32 = day.parse().map_err(|_| err())?;
        let year: i32 = year.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(err());
        }
        Ok(Self::new(year, month, day))
    }
}

/// Date string with `/` swapped for `-`
pub fn file_stamp(date: &str) -> String {
    date.replace('/', "-")
}

/// Everything written to disk for one day, except the drawing itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: String,
    pub mood: String,
    pub note: String,
}

impl JournalEntry {
    pub fn new(date: impl Into<String>, mood: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            mood: mood.into(),
            note: note.into(),
        }
    }

    /// Plain-text body of the note file
    pub fn render_text(&self) -> String {
        format!(
            "Date: {}\nMood: {}\n\nNote:\n{}\n",
            self.date, self.mood, self.note
        )
    }
}
