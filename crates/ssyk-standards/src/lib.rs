//! SSYK translation tables.
//!
//! Loads the English occupation titles of SSYK96 and SSYK2012 into
//! per-level code to label tables.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use ssyk_model::{Level, Taxonomy};
//! use ssyk_standards::{default_source_path, load_from_workbook};
//!
//! let path = default_source_path(Path::new("02_translation_files"), Taxonomy::Ssyk2012);
//! let table = load_from_workbook(&path, Taxonomy::Ssyk2012)?;
//! assert_eq!(table.lookup(Level::One, "1"), Some("Managers"));
//! ```

mod error;
mod loader;
mod source;

pub use error::{Result, StandardsError};
pub use loader::{
    SectionLoad, default_source_path, load, load_from_workbook, parse_section,
    translation_file_name,
};
pub use source::{MemorySource, TranslationSource, WorkbookSource};
