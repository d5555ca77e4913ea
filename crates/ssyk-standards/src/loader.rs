//! Translation table loading.
//!
//! Each taxonomy publishes its English titles as one section per hierarchy
//! level. A section starts with a fixed number of leading rows (a title
//! block in SSYK2012, none in SSYK96), followed by a header row and then
//! `code, title` data rows. Only the first two columns are read.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ssyk_ingest::SheetRows;
use ssyk_model::{Level, LevelTable, MISSING, RawValue, Taxonomy, TranslationTable};
use ssyk_normalization::normalize_code;

use crate::error::{Result, StandardsError};
use crate::source::{TranslationSource, WorkbookSource};

/// File name of the English translation workbook for `taxonomy`.
pub fn translation_file_name(taxonomy: Taxonomy) -> String {
    format!("{}_en.xlsx", taxonomy.key())
}

/// Default location of the translation workbook inside `dir`.
pub fn default_source_path(dir: &Path, taxonomy: Taxonomy) -> PathBuf {
    dir.join(translation_file_name(taxonomy))
}

/// Outcome of parsing a single section.
#[derive(Debug, Clone, Default)]
pub struct SectionLoad {
    /// Code to label mapping.
    pub table: LevelTable,
    /// Rows dropped because the code or label was missing.
    pub dropped_missing: usize,
    /// Rows dropped because the code did not normalize.
    pub dropped_invalid: usize,
    /// Rows whose code replaced an earlier row's label.
    pub duplicates: usize,
}

/// Loads the translation table of `taxonomy` from its workbook.
pub fn load_from_workbook(path: &Path, taxonomy: Taxonomy) -> Result<TranslationTable> {
    let mut source = WorkbookSource::open(path)?;
    load(taxonomy, &mut source)
}

/// Loads all four levels of `taxonomy` from `source`.
///
/// Fails if any section is missing or malformed; no partial table is returned.
pub fn load(taxonomy: Taxonomy, source: &mut impl TranslationSource) -> Result<TranslationTable> {
    let origin = source.origin();
    let mut table = TranslationTable::new(taxonomy);
    for level in Level::ALL {
        let spec = taxonomy.level_spec(level);
        let rows = source.read_section(spec.section)?;
        let loaded = parse_section(&rows, taxonomy.section_skip_rows(), spec.digits).map_err(
            |reason| StandardsError::SectionShape {
                origin: origin.clone(),
                section: spec.section.to_string(),
                reason,
            },
        )?;
        debug!(
            taxonomy = taxonomy.key(),
            level = level.number(),
            section = spec.section,
            entries = loaded.table.len(),
            dropped_missing = loaded.dropped_missing,
            dropped_invalid = loaded.dropped_invalid,
            duplicates = loaded.duplicates,
            "loaded translation section"
        );
        table.set_level(level, loaded.table);
    }
    info!(
        taxonomy = taxonomy.key(),
        origin = %origin,
        level_1 = table.level_len(Level::One),
        level_2 = table.level_len(Level::Two),
        level_3 = table.level_len(Level::Three),
        level_4 = table.level_len(Level::Four),
        "loaded translation table"
    );
    Ok(table)
}

/// Parses one section's rows into a code to label mapping.
///
/// `skip_rows` leading rows are ignored and the next row is taken as the
/// header. Later rows override earlier rows with the same code.
pub fn parse_section(
    rows: &SheetRows,
    skip_rows: usize,
    digits: usize,
) -> std::result::Result<SectionLoad, String> {
    if rows.len() <= skip_rows {
        return Err(format!(
            "expected a header row after {skip_rows} leading rows, found {} rows",
            rows.len()
        ));
    }
    let width = rows[skip_rows..].iter().map(Vec::len).max().unwrap_or(0);
    if width < 2 {
        return Err(format!(
            "expected code and label columns, found {width} column(s)"
        ));
    }

    let mut loaded = SectionLoad::default();
    for row in &rows[skip_rows + 1..] {
        let code = row.first().unwrap_or(&MISSING);
        let label = row.get(1).and_then(RawValue::to_text);
        let label = match label {
            Some(label) if !code.is_missing() && !label.trim().is_empty() => label,
            _ => {
                loaded.dropped_missing += 1;
                continue;
            }
        };
        let Some(code) = normalize_code(code, digits) else {
            loaded.dropped_invalid += 1;
            continue;
        };
        if loaded.table.insert(code, label).is_some() {
            loaded.duplicates += 1;
        }
    }
    Ok(loaded)
}
