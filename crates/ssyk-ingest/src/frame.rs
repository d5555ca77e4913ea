//! Conversion of worksheet rows into a typed Polars DataFrame.

use std::collections::BTreeSet;

use polars::prelude::*;

use ssyk_model::{MISSING, RawValue};

use crate::error::Result;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

/// Builds a DataFrame from worksheet rows, using the first row as header.
///
/// Blank header cells become `Unnamed: <index>` and repeated names get a
/// `.1`, `.2`, ... suffix. Columns whose values are all integral numbers
/// become `Int64`, all numeric `Float64`, anything else `String`. Missing
/// cells are null.
pub fn rows_to_frame(rows: &[Vec<RawValue>]) -> Result<DataFrame> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(DataFrame::empty());
    };
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let names = header_names(header, width);
    let mut columns = Vec::with_capacity(width);
    for (idx, name) in names.iter().enumerate() {
        let cells: Vec<&RawValue> = data
            .iter()
            .map(|row| row.get(idx).unwrap_or(&MISSING))
            .collect();
        columns.push(build_column(name, &cells));
    }
    Ok(DataFrame::new(columns)?)
}

fn header_names(header: &[RawValue], width: usize) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(width);
    for idx in 0..width {
        let base = header
            .get(idx)
            .and_then(RawValue::to_text)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| format!("Unnamed: {idx}"));
        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }
    names
}

fn column_kind(cells: &[&RawValue]) -> ColumnKind {
    let mut kind = None;
    for cell in cells.iter().filter(|cell| !cell.is_missing()) {
        let RawValue::Number(value) = cell else {
            return ColumnKind::Text;
        };
        let integral = value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER;
        kind = match (kind, integral) {
            (Some(ColumnKind::Float), _) | (_, false) => Some(ColumnKind::Float),
            _ => Some(ColumnKind::Integer),
        };
    }
    kind.unwrap_or(ColumnKind::Text)
}

fn build_column(name: &str, cells: &[&RawValue]) -> Column {
    match column_kind(cells) {
        ColumnKind::Integer => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    RawValue::Number(v) if !v.is_nan() => Some(*v as i64),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    RawValue::Number(v) if !v.is_nan() => Some(*v),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        }
        ColumnKind::Text => {
            let values: Vec<Option<String>> = cells.iter().map(|cell| cell.to_text()).collect();
            Column::new(name.into(), values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> RawValue {
        RawValue::from(value)
    }

    #[test]
    fn header_names_fill_blanks_and_dedupe() {
        let header = vec![text("id"), RawValue::Missing, text("id"), text("id")];
        assert_eq!(
            header_names(&header, 5),
            vec!["id", "Unnamed: 1", "id.1", "id.2", "Unnamed: 4"]
        );
    }

    #[test]
    fn infers_column_types() {
        let rows = vec![
            vec![text("ssyk96_1"), text("share"), text("ssyk96_2")],
            vec![RawValue::Number(1.0), RawValue::Number(0.5), text("11 Ledare")],
            vec![RawValue::Missing, RawValue::Number(2.0), RawValue::Number(12.0)],
        ];
        let df = rows_to_frame(&rows).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("ssyk96_1").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("share").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("ssyk96_2").unwrap().dtype(), &DataType::String);
        let mixed = df.column("ssyk96_2").unwrap().str().unwrap();
        assert_eq!(mixed.get(1), Some("12"));
        assert_eq!(df.column("ssyk96_1").unwrap().null_count(), 1);
    }

    #[test]
    fn empty_rows_give_empty_frame() {
        let df = rows_to_frame(&[]).unwrap();
        assert_eq!(df.width(), 0);
    }
}
