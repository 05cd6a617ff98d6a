//! Types for the static festival table.

use serde::Serialize;

/// Display category of a festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FestivalCategory {
    /// Ordinary calendar entry.
    #[serde(rename = "calendar")]
    Generic,
    /// Headline festival (Diwali and the like).
    #[serde(rename = "diya")]
    Major,
}

/// One festival of the curated table.
///
/// `date` is the locale-formatted source string, kept verbatim so output
/// matches the table exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FestivalEntry {
    pub name: &'static str,
    pub date: &'static str,
    #[serde(rename = "icon")]
    pub category: FestivalCategory,
}

impl FestivalEntry {
    pub const fn new(name: &'static str, date: &'static str, category: FestivalCategory) -> Self {
        Self {
            name,
            date,
            category,
        }
    }

    pub const fn is_major(&self) -> bool {
        matches!(self.category, FestivalCategory::Major)
    }
}
