//! Static taxonomy configuration.
//!
//! Both SSYK versions share the same four-level hierarchy (level N has N
//! digits) but lay out their translation workbooks differently. The layout
//! is captured in a read-only table keyed by taxonomy and level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Swedish standard occupational classification version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    /// SSYK 96.
    Ssyk96,
    /// SSYK 2012.
    Ssyk2012,
}

impl Taxonomy {
    /// Returns the lowercase key used in column and file names (e.g. `ssyk96`).
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Ssyk96 => "ssyk96",
            Self::Ssyk2012 => "ssyk2012",
        }
    }

    /// Returns the display name (e.g. `SSYK96`).
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ssyk96 => "SSYK96",
            Self::Ssyk2012 => "SSYK2012",
        }
    }

    /// All taxonomies in processing order.
    pub const fn all() -> &'static [Taxonomy] {
        &[Self::Ssyk96, Self::Ssyk2012]
    }

    /// Number of rows preceding the header row of each translation section.
    pub const fn section_skip_rows(&self) -> usize {
        match self {
            Self::Ssyk96 => 0,
            Self::Ssyk2012 => 3,
        }
    }

    /// Layout of the given level for this taxonomy.
    pub const fn level_spec(&self, level: Level) -> LevelSpec {
        let table = match self {
            Self::Ssyk96 => &SSYK96_LEVELS,
            Self::Ssyk2012 => &SSYK2012_LEVELS,
        };
        table[level.index()]
    }

    /// Data column holding codes of `level` (e.g. `ssyk2012_3`).
    pub fn level_column(&self, level: Level) -> String {
        format!("{}_{}", self.key(), level.number())
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Hierarchy level of a classification code.
///
/// Level 1 is the coarsest (one digit), level 4 the finest (four digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    One,
    Two,
    Three,
    Four,
}

impl Level {
    /// All levels from coarsest to finest.
    pub const ALL: [Level; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Level number, 1 through 4.
    pub const fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Digit width of canonical codes at this level.
    pub const fn digits(&self) -> usize {
        self.number() as usize
    }

    const fn index(&self) -> usize {
        self.digits() - 1
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl TryFrom<u8> for Level {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(ModelError::InvalidLevel { value: other }),
        }
    }
}

/// Translation workbook layout for one (taxonomy, level) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSpec {
    /// Worksheet holding the level's code/label section.
    pub section: &'static str,
    /// Digit width of canonical codes.
    pub digits: usize,
}

const SSYK96_LEVELS: [LevelSpec; 4] = [
    LevelSpec {
        section: "Level_1",
        digits: 1,
    },
    LevelSpec {
        section: "Level_2",
        digits: 2,
    },
    LevelSpec {
        section: "Level_3",
        digits: 3,
    },
    LevelSpec {
        section: "Level_4",
        digits: 4,
    },
];

const SSYK2012_LEVELS: [LevelSpec; 4] = [
    LevelSpec {
        section: "1-digit",
        digits: 1,
    },
    LevelSpec {
        section: "2-digit",
        digits: 2,
    },
    LevelSpec {
        section: "3-digit",
        digits: 3,
    },
    LevelSpec {
        section: "4-digit",
        digits: 4,
    },
];
