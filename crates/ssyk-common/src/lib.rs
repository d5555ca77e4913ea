//! Shared utilities for the SSYK translator crates.

pub mod polars;

pub use crate::polars::{any_to_string, format_numeric};
