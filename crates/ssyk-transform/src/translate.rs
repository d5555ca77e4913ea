//! Level column translation.

use polars::prelude::*;
use tracing::{debug, warn};

use ssyk_common::any_to_string;
use ssyk_model::{
    Code, Level, LevelStats, RawValue, Taxonomy, TranslationStats, TranslationTable,
};
use ssyk_normalization::normalize_code;

use crate::error::Result;

/// Result of translating a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellTranslation {
    /// Code found and labelled; holds `"<code> <label>"`.
    Translated { code: Code, text: String },
    /// Code found but the level has no label for it.
    Unmatched(Code),
    /// Value does not start with a code.
    NoCode,
}

impl CellTranslation {
    /// The recognized code, if any.
    pub fn code(&self) -> Option<&Code> {
        match self {
            Self::Translated { code, .. } | Self::Unmatched(code) => Some(code),
            Self::NoCode => None,
        }
    }
}

/// Normalizes `value` at `level` and looks up its label in `table`.
pub fn translate_value(value: &RawValue, level: Level, table: &TranslationTable) -> CellTranslation {
    let Some(code) = normalize_code(value, level.digits()) else {
        return CellTranslation::NoCode;
    };
    match table.lookup(level, code.as_str()) {
        Some(label) => {
            let text = format!("{code} {label}");
            CellTranslation::Translated { code, text }
        }
        None => CellTranslation::Unmatched(code),
    }
}

/// Translates every cell of a level column.
///
/// Returns the new cell values in row order together with the level's
/// statistics. Cells without a translation keep their original value; null
/// cells stay null.
pub fn translate_column(
    column: &Column,
    level: Level,
    table: &TranslationTable,
) -> Result<(Vec<Option<String>>, LevelStats)> {
    let series = column.as_materialized_series();
    let mut values = Vec::with_capacity(series.len());
    let mut stats = LevelStats::default();
    for idx in 0..series.len() {
        let raw = match series.get(idx)? {
            AnyValue::Null => RawValue::Missing,
            other => RawValue::Text(any_to_string(other)),
        };
        let cell = match translate_value(&raw, level, table) {
            CellTranslation::Translated { code, text } => {
                stats.record(&code, true);
                Some(text)
            }
            CellTranslation::Unmatched(code) => {
                stats.record(&code, false);
                raw.to_text()
            }
            CellTranslation::NoCode => raw.to_text(),
        };
        values.push(cell);
    }
    Ok((values, stats))
}

/// Translates the `<taxonomy>_<level>` columns of `df`.
///
/// The input frame is left untouched; the returned frame has the same
/// columns in the same order and the same number of rows. Levels without a
/// column are skipped and have no statistics entry.
pub fn translate_frame(
    df: &DataFrame,
    taxonomy: Taxonomy,
    table: &TranslationTable,
) -> Result<(DataFrame, TranslationStats)> {
    let mut translated = df.clone();
    let mut stats = TranslationStats::new();
    for level in Level::ALL {
        let name = taxonomy.level_column(level);
        let Ok(column) = df.column(&name) else {
            debug!(taxonomy = taxonomy.key(), column = %name, "level column absent");
            continue;
        };
        let (values, level_stats) = translate_column(column, level, table)?;
        translated.with_column(Series::new(name.as_str().into(), values))?;
        debug!(
            taxonomy = taxonomy.key(),
            column = %name,
            total_codes = level_stats.total_codes,
            translated = level_stats.translated,
            missing = level_stats.missing(),
            "translated level column"
        );
        if !level_stats.all_matched() {
            warn!(
                taxonomy = taxonomy.key(),
                column = %name,
                missing = level_stats.missing(),
                distinct_unmatched = level_stats.unmatched_codes.len(),
                "codes without English label"
            );
        }
        stats.insert(level, level_stats);
    }
    Ok((translated, stats))
}
