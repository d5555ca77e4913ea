//! Error types for table translation.

use thiserror::Error;

/// Errors raised while translating a DataFrame.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
