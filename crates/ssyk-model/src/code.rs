//! Classification codes and raw cell values.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ssyk_common::format_numeric;

/// A classification code made of ASCII decimal digits.
///
/// Canonical codes are left-padded with zeros to their level's digit width.
/// A code is never truncated, so a digit run longer than the width is kept
/// as is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// Pads `digits` with leading zeros up to `width`.
    ///
    /// Returns `None` unless `digits` is a non-empty run of ASCII digits.
    pub fn from_digits(digits: &str, width: usize) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(format!("{digits:0>width$}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Missing value for lookups that fall outside a row.
pub static MISSING: RawValue = RawValue::Missing;

/// A loosely typed cell value as read from a spreadsheet or CSV source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Empty cell or null.
    Missing,
    /// Numeric cell.
    Number(f64),
    /// Text cell.
    Text(String),
}

impl RawValue {
    /// String form of the value, `None` for missing values.
    ///
    /// Integral numbers render without a fractional part (`1.0` -> `"1"`).
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Number(value) if value.is_nan() => None,
            Self::Number(value) => Some(format_numeric(*value)),
            Self::Text(text) => Some(text.clone()),
        }
    }

    /// Returns true for missing values and NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(value) => value.is_nan(),
            Self::Text(_) => false,
        }
    }
}

impl From<Option<&str>> for RawValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Missing,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}
