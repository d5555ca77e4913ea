//! Spreadsheet workbook access.
//!
//! Worksheets are returned as a dense grid of [`RawValue`]s indexed by
//! absolute sheet position, so row 0 is always the first sheet row even when
//! the used range starts further down.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use ssyk_model::RawValue;

use crate::error::{IngestError, Result};

/// Rows of a worksheet, each padded to the sheet's used width.
pub type SheetRows = Vec<Vec<RawValue>>;

/// An open spreadsheet workbook (`.xlsx`, `.xlsm`, `.xlsb`, `.xls` or `.ods`).
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Opens the workbook at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let sheets = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Worksheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    pub fn has_sheet(&self, sheet: &str) -> bool {
        self.sheet_names().iter().any(|name| name == sheet)
    }

    /// Reads every row of `sheet`.
    pub fn sheet_rows(&mut self, sheet: &str) -> Result<SheetRows> {
        if !self.has_sheet(sheet) {
            return Err(IngestError::SheetNotFound {
                path: self.path.clone(),
                sheet: sheet.to_string(),
            });
        }
        let range = self
            .sheets
            .worksheet_range(sheet)
            .map_err(|e| IngestError::SheetRead {
                path: self.path.clone(),
                sheet: sheet.to_string(),
                message: e.to_string(),
            })?;
        let rows = range_rows(&range);
        debug!(
            path = %self.path.display(),
            sheet,
            rows = rows.len(),
            "read worksheet"
        );
        Ok(rows)
    }

    /// Reads the first worksheet, returning its name and rows.
    pub fn first_sheet_rows(&mut self) -> Result<(String, SheetRows)> {
        let Some(sheet) = self.sheet_names().into_iter().next() else {
            return Err(IngestError::NoSheets {
                path: self.path.clone(),
            });
        };
        let rows = self.sheet_rows(&sheet)?;
        Ok((sheet, rows))
    }
}

fn range_rows(range: &Range<Data>) -> SheetRows {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };
    (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map_or(RawValue::Missing, cell_value)
                })
                .collect()
        })
        .collect()
}

/// Converts a spreadsheet cell to a [`RawValue`].
///
/// Empty strings and error cells count as missing.
pub fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Missing,
        Data::Int(v) => RawValue::Number(*v as f64),
        Data::Float(v) => RawValue::Number(*v),
        Data::String(s) if s.is_empty() => RawValue::Missing,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Bool(b) => RawValue::Text(b.to_string()),
        other => RawValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values() {
        assert_eq!(cell_value(&Data::Empty), RawValue::Missing);
        assert_eq!(cell_value(&Data::Int(11)), RawValue::Number(11.0));
        assert_eq!(cell_value(&Data::Float(2.5)), RawValue::Number(2.5));
        assert_eq!(cell_value(&Data::String(String::new())), RawValue::Missing);
        assert_eq!(
            cell_value(&Data::String("Managers".to_string())),
            RawValue::Text("Managers".to_string())
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let result = Workbook::open(Path::new("/nonexistent/ssyk96_en.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
