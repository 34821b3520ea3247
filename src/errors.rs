use thiserror::Error;

use crate::parsers::csv::MIN_COLUMNS;

/// Errors raised while reading exports and building reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to read the export from disk
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The CSV reader failed (broken quoting, invalid UTF-8, etc.)
    #[error("CSV read failed: {0}")]
    CsvReadFailed(#[from] csv::Error),

    /// Empty file, not even a header line
    #[error("Export has no header row")]
    MissingHeader,

    /// The builder was given neither content nor a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    // ── Row errors (the row is dropped, processing goes on) ─────────────────────

    /// Row with fewer columns than the export layout requires
    #[error("Row has {0} columns, expected at least {min}", min = MIN_COLUMNS)]
    ShortRow(usize),

    /// `created_at` in an unrecognized format
    #[error("Invalid created_at timestamp: {0:?}")]
    CreatedAtInvalidFormat(String),

    // ── Driver errors ───────────────────────────────────────────────────────────

    /// Failed to serialize the final document
    #[error("Failed to serialize report: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Convenience alias for Result with the crate error type
pub type ReportResult<T> = Result<T, ReportError>;
