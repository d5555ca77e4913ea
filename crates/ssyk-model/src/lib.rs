//! SSYK data model.
//!
//! - [`taxonomy`]: taxonomies, hierarchy levels and the static workbook layout
//! - [`code`]: canonical codes and loosely typed cell values
//! - [`table`]: code to label translation tables
//! - [`stats`]: per-level translation statistics

pub mod code;
pub mod error;
pub mod stats;
pub mod table;
pub mod taxonomy;

pub use code::{Code, MISSING, RawValue};
pub use error::ModelError;
pub use stats::{LevelStats, TranslationStats, UNMATCHED_SAMPLE_SIZE};
pub use table::{LevelTable, TranslationTable};
pub use taxonomy::{Level, LevelSpec, Taxonomy};
