//! SSYK code translation over DataFrames.
//!
//! Replaces the cells of the `<taxonomy>_<level>` columns of a table with
//! `"<code> <English label>"` wherever the code is known, and gathers
//! per-level statistics on what could not be translated.

mod error;
mod translate;

pub use error::{Result, TransformError};
pub use translate::{CellTranslation, translate_column, translate_frame, translate_value};
