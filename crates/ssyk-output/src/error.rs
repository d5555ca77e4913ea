//! Error types for output generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Directory could not be created.
    #[error("create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File could not be created or written.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
