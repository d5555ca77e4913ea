//! JSON coverage report.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use ssyk_model::{Taxonomy, TranslationStats};

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Outcome of translating one input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyReport {
    pub taxonomy: Taxonomy,
    pub input: PathBuf,
    /// Written table; `None` on dry runs.
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub levels: TranslationStats,
}

/// Coverage report for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub taxonomies: Vec<TaxonomyReport>,
}

impl RunReport {
    pub fn push(&mut self, report: TaxonomyReport) {
        self.taxonomies.push(report);
    }

    /// Sum of unmatched cells across all taxonomies and levels.
    pub fn total_missing(&self) -> usize {
        self.taxonomies
            .iter()
            .flat_map(|report| report.levels.values())
            .map(|stats| stats.missing())
            .sum()
    }
}

/// Writes `report` as pretty-printed JSON.
pub fn write_report_json(report: &RunReport, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote coverage report");
    Ok(())
}
