//! Shared path helpers for output generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Suffix appended to the input stem for translated tables.
pub const TRANSLATED_SUFFIX: &str = "_translated";

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Output file name for a translated input table: `<stem>_translated.csv`.
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}{TRANSLATED_SUFFIX}.csv")
}

/// Full output path for `input` inside `output_dir`.
pub fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    output_dir.join(output_file_name(input))
}
