//! Output generation for translated SSYK tables.
//!
//! - **CSV**: translated tables, one file per input
//! - **JSON**: optional per-level coverage report

mod common;
mod csv;
mod error;
mod report;

pub use common::{TRANSLATED_SUFFIX, ensure_parent_dir, output_file_name, output_path};
pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use report::{RunReport, TaxonomyReport, write_report_json};
