//! Input table ingestion.
//!
//! This crate loads survey tables and translation workbooks from disk:
//!
//! - **Tables**: the first worksheet of a spreadsheet, or a CSV file, read into
//!   a Polars DataFrame with inferred column types
//! - **Workbooks**: named worksheets as grids of [`ssyk_model::RawValue`]s for
//!   section-based readers
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ssyk_ingest::{Workbook, read_table};
//!
//! let df = read_table(Path::new("01_original_data/daioe_ssyk96.xlsx"))?;
//!
//! let mut workbook = Workbook::open(Path::new("02_translation_files/ssyk96_en.xlsx"))?;
//! let rows = workbook.sheet_rows("Level_1")?;
//! ```

mod csv;
mod error;
mod frame;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use csv::read_csv_table;
pub use frame::rows_to_frame;
pub use table::{TableFormat, read_table};

// === Workbooks ===
pub use workbook::{SheetRows, Workbook, cell_value};
