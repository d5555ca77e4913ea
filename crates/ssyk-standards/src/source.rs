//! Translation sources.
//!
//! A translation source holds one section per hierarchy level. Sections are
//! worksheets in the published workbooks; [`MemorySource`] keeps them in
//! memory for callers that assemble tables programmatically.

use std::collections::BTreeMap;
use std::path::Path;

use ssyk_ingest::{IngestError, SheetRows, Workbook};
use ssyk_model::RawValue;

use crate::error::{Result, StandardsError};

/// Provides raw section rows to the loader.
pub trait TranslationSource {
    /// Identifies the source in error messages (usually a file path).
    fn origin(&self) -> String;

    /// Reads every row of `section`, starting at the section's first row.
    fn read_section(&mut self, section: &str) -> Result<SheetRows>;
}

/// Translation source backed by a spreadsheet workbook.
pub struct WorkbookSource {
    workbook: Workbook,
}

impl WorkbookSource {
    pub fn open(path: &Path) -> Result<Self> {
        let workbook = Workbook::open(path).map_err(|cause| StandardsError::Open {
            origin: path.display().to_string(),
            cause,
        })?;
        Ok(Self { workbook })
    }
}

impl TranslationSource for WorkbookSource {
    fn origin(&self) -> String {
        self.workbook.path().display().to_string()
    }

    fn read_section(&mut self, section: &str) -> Result<SheetRows> {
        let origin = self.origin();
        self.workbook
            .sheet_rows(section)
            .map_err(|cause| match cause {
                IngestError::SheetNotFound { .. } => StandardsError::SectionNotFound {
                    origin,
                    section: section.to_string(),
                },
                cause => StandardsError::SectionRead {
                    origin,
                    section: section.to_string(),
                    cause,
                },
            })
    }
}

/// In-memory translation source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    origin: String,
    sections: BTreeMap<String, SheetRows>,
}

impl MemorySource {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            sections: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a section.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>, rows: SheetRows) -> Self {
        self.sections.insert(section.into(), rows);
        self
    }

    /// Adds a section made of a header row followed by `(code, label)` rows.
    #[must_use]
    pub fn with_entries<C, L>(
        self,
        section: impl Into<String>,
        leading_rows: usize,
        entries: impl IntoIterator<Item = (C, L)>,
    ) -> Self
    where
        C: Into<RawValue>,
        L: Into<RawValue>,
    {
        let mut rows: SheetRows = vec![vec![RawValue::Missing, RawValue::Missing]; leading_rows];
        rows.push(vec![RawValue::from("Code"), RawValue::from("Title")]);
        rows.extend(
            entries
                .into_iter()
                .map(|(code, label)| vec![code.into(), label.into()]),
        );
        self.with_section(section, rows)
    }
}

impl TranslationSource for MemorySource {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn read_section(&mut self, section: &str) -> Result<SheetRows> {
        self.sections
            .get(section)
            .cloned()
            .ok_or_else(|| StandardsError::SectionNotFound {
                origin: self.origin.clone(),
                section: section.to_string(),
            })
    }
}
