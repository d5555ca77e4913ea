//! Error types for translation table loading.

use thiserror::Error;

use ssyk_ingest::IngestError;

/// Errors that can occur when loading translation tables.
///
/// Every variant is fatal: a partially loaded table would silently leave
/// codes untranslated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Translation workbook could not be opened.
    #[error("failed to open translation source {origin}: {cause}")]
    Open {
        origin: String,
        #[source]
        cause: IngestError,
    },

    /// Section (worksheet) is absent from the translation source.
    #[error("section '{section}' not found in translation source {origin}")]
    SectionNotFound { origin: String, section: String },

    /// Section exists but could not be read.
    #[error("failed to read section '{section}' of {origin}: {cause}")]
    SectionRead {
        origin: String,
        section: String,
        #[source]
        cause: IngestError,
    },

    /// Section does not have the expected header row and code/label columns.
    #[error("malformed section '{section}' in {origin}: {reason}")]
    SectionShape {
        origin: String,
        section: String,
        reason: String,
    },
}

/// Result type for translation table loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
