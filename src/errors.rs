//! Unified application error type.
//! Loader, detector, session gate and CLI handlers all return AppError so
//! every failure reaches the user through the same reporting path.

use crate::models::notice::Severity;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Timetable source
    // ---------------------------
    #[error(
        "Timetable file not found: '{0}'. Place the spreadsheet with that exact name in the working directory, or pass --file/--upload."
    )]
    SourceUnavailable(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("Timetable is missing required columns: {}. Ensure the spreadsheet has these columns.", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No teacher names found in 'tname' column.")]
    NoTeachers,

    // ---------------------------
    // Selection / view flow
    // ---------------------------
    #[error("Please select your name.")]
    NoSelection,

    #[error("Name not found: '{0}'")]
    NameNotFound(String),

    #[error("Multiple teachers match '{query}': {}. Please enter the exact name.", .candidates.join(", "))]
    AmbiguousName {
        query: String,
        candidates: Vec<String>,
    },

    #[error(
        "You have used the maximum number of timetable views ({0}) for this session. Access blocked; please contact the administrator."
    )]
    AttemptsExhausted(u32),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Severity used when the error is shown to the user.
    pub fn severity(&self) -> Severity {
        match self {
            AppError::NoSelection | AppError::NameNotFound(_) | AppError::AmbiguousName { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
