//! Text rendering of DataFrame cells.
//!
//! Level columns may arrive as integers (a workbook column of bare codes),
//! floats or strings. The translator reads every cell through
//! [`any_to_string`] so untranslated cells are written back as they looked in
//! the source, and codes stored as `1110.0` still normalize to `1110`.

use polars::prelude::AnyValue;

/// Renders a cell as text. `Null` renders as the empty string.
///
/// ```
/// use polars::prelude::AnyValue;
/// use ssyk_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Int64(2512)), "2512");
/// assert_eq!(any_to_string(AnyValue::Float64(311.0)), "311");
/// assert_eq!(any_to_string(AnyValue::String("97 - Other")), "97 - Other");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(text) => text.to_string(),
        AnyValue::StringOwned(text) => text.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    }
}

/// Shortest decimal form of `value`; whole numbers have no fractional part.
///
/// ```
/// use ssyk_common::format_numeric;
///
/// assert_eq!(format_numeric(1110.0), "1110");
/// assert_eq!(format_numeric(0.25), "0.25");
/// ```
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
