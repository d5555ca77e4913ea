//! SSYK code normalization.
//!
//! Cells in survey tables hold codes in many shapes: bare numbers (`3`,
//! `3.0`), codes followed by a title (`"97 - Other"`), or free text. This
//! crate reduces a cell to its canonical code for a given hierarchy level.
//!
//! # Example
//!
//! ```
//! use ssyk_model::RawValue;
//! use ssyk_normalization::normalize_code;
//!
//! let code = normalize_code(&RawValue::from("1 foo"), 3).unwrap();
//! assert_eq!(code.as_str(), "001");
//! assert!(normalize_code(&RawValue::Missing, 3).is_none());
//! ```

mod code;

pub use code::{leading_digits, normalize_code, normalize_text};
