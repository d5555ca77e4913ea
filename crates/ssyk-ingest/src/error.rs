//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading input tables and workbooks.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File extension is not a supported table format.
    #[error("unsupported table format: {path} (expected .xlsx, .xlsm, .xls, .ods or .csv)")]
    UnsupportedFormat { path: PathBuf },

    // === Workbook Errors ===
    /// Workbook could not be opened or parsed.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheet with the requested name.
    #[error("worksheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Worksheet could not be read.
    #[error("failed to read worksheet '{sheet}' in {path}: {message}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        message: String,
    },

    /// Workbook contains no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoSheets { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("/data/ssyk96_en.xlsx"),
            sheet: "Level_4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "worksheet 'Level_4' not found in /data/ssyk96_en.xlsx"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
