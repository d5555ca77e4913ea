//! Code to English label translation tables.

use std::collections::BTreeMap;

use crate::code::Code;
use crate::taxonomy::{Level, Taxonomy};

/// Per-level mapping from canonical code to label.
pub type LevelTable = BTreeMap<Code, String>;

/// English labels for every level of one taxonomy.
///
/// Built once by the loader and only read afterwards.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    pub taxonomy: Taxonomy,
    levels: BTreeMap<Level, LevelTable>,
}

impl TranslationTable {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            levels: BTreeMap::new(),
        }
    }

    /// Adds a label, replacing any earlier label for the same code.
    ///
    /// Returns the replaced label, if any.
    pub fn insert(&mut self, level: Level, code: Code, label: String) -> Option<String> {
        self.levels.entry(level).or_default().insert(code, label)
    }

    /// Installs a complete level table.
    pub fn set_level(&mut self, level: Level, table: LevelTable) {
        self.levels.insert(level, table);
    }

    /// Label for `code` at `level`.
    pub fn lookup(&self, level: Level, code: &str) -> Option<&str> {
        self.levels
            .get(&level)
            .and_then(|table| table.get(code))
            .map(String::as_str)
    }

    /// Number of codes known at `level`.
    pub fn level_len(&self, level: Level) -> usize {
        self.levels.get(&level).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.values().all(BTreeMap::is_empty)
    }
}
