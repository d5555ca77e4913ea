//! Format-dispatching table reader.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use ssyk_model::RawValue;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::frame::rows_to_frame;
use crate::workbook::Workbook;

/// On-disk format of an input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Spreadsheet workbook; the first worksheet is read.
    Workbook,
    /// Comma-separated values with a header row.
    Csv,
}

impl TableFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Reads an input table from a workbook's first worksheet or a CSV file.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let format = TableFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let df = match format {
        TableFormat::Workbook => {
            let mut workbook = Workbook::open(path)?;
            let (_, rows) = workbook.first_sheet_rows()?;
            rows_to_frame(skip_blank_rows(&rows))?
        }
        TableFormat::Csv => read_csv_table(path)?,
    };
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded input table"
    );
    Ok(df)
}

/// Drops the blank rows above the first populated row.
fn skip_blank_rows(rows: &[Vec<RawValue>]) -> &[Vec<RawValue>] {
    let start = rows
        .iter()
        .position(|row| row.iter().any(|cell| !cell.is_missing()))
        .unwrap_or(rows.len());
    &rows[start..]
}
