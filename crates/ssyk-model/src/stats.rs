//! Per-level translation statistics.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::taxonomy::Level;

/// Number of unmatched codes shown in summaries.
pub const UNMATCHED_SAMPLE_SIZE: usize = 5;

/// Counts gathered while translating one level column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Cells that yielded a code.
    pub total_codes: usize,
    /// Cells whose code had a label.
    pub translated: usize,
    /// Distinct codes without a label.
    pub unmatched_codes: BTreeSet<Code>,
}

impl LevelStats {
    /// Records a cell that produced `code`; `matched` tells whether a label was found.
    pub fn record(&mut self, code: &Code, matched: bool) {
        self.total_codes += 1;
        if matched {
            self.translated += 1;
        } else if !self.unmatched_codes.contains(code) {
            self.unmatched_codes.insert(code.clone());
        }
    }

    /// Codes that were recognized but not translated.
    pub fn missing(&self) -> usize {
        self.total_codes - self.translated
    }

    pub fn all_matched(&self) -> bool {
        self.missing() == 0
    }

    /// First unmatched codes in sorted order.
    pub fn unmatched_sample(&self) -> Vec<&Code> {
        self.unmatched_codes
            .iter()
            .take(UNMATCHED_SAMPLE_SIZE)
            .collect()
    }
}

/// Statistics for every level column present in a translated table.
pub type TranslationStats = BTreeMap<Level, LevelStats>;
