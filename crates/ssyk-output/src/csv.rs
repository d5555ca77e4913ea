//! CSV output for translated tables.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Writes `df` to `path` as comma-separated values with a header row.
///
/// Parent directories are created as needed. Nulls are written as empty
/// fields and no index column is added.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut data = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut data)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote translated table"
    );
    Ok(())
}
