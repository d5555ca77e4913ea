use ssyk_model::{Code, RawValue};

/// Longest leading run of ASCII digits in `text`.
pub fn leading_digits(text: &str) -> &str {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Extracts the leading code of `text` and pads it to `digits`.
///
/// Surrounding whitespace is ignored. Returns `None` for blank text or text
/// that does not start with a digit. Runs longer than `digits` are returned
/// unchanged.
pub fn normalize_text(text: &str, digits: usize) -> Option<Code> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Code::from_digits(leading_digits(trimmed), digits)
}

/// Normalizes a raw cell value to a canonical code of width `digits`.
pub fn normalize_code(value: &RawValue, digits: usize) -> Option<Code> {
    let text = value.to_text()?;
    normalize_text(&text, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digits_stops_at_text() {
        assert_eq!(leading_digits("97 - Other"), "97");
        assert_eq!(leading_digits("1234"), "1234");
        assert_eq!(leading_digits("x12"), "");
        assert_eq!(leading_digits(""), "");
    }

    #[test]
    fn pads_short_codes() {
        assert_eq!(normalize_text("1 foo", 3).unwrap().as_str(), "001");
        assert_eq!(normalize_text("  42  ", 4).unwrap().as_str(), "0042");
    }

    #[test]
    fn numbers_use_integral_form() {
        assert_eq!(
            normalize_code(&RawValue::Number(7.0), 2).unwrap().as_str(),
            "07"
        );
        assert_eq!(
            normalize_code(&RawValue::Number(12.7), 2).unwrap().as_str(),
            "12"
        );
    }

    #[test]
    fn rejects_blank_and_text() {
        assert_eq!(normalize_text("", 2), None);
        assert_eq!(normalize_text("   ", 2), None);
        assert_eq!(normalize_text("Managers", 2), None);
        assert_eq!(normalize_text("-5", 2), None);
        assert_eq!(normalize_code(&RawValue::Missing, 2), None);
        assert_eq!(normalize_code(&RawValue::Number(f64::NAN), 2), None);
    }

    #[test]
    fn does_not_truncate_long_runs() {
        assert_eq!(normalize_text("12345", 2).unwrap().as_str(), "12345");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(normalize_text("١٢", 2), None);
    }
}
