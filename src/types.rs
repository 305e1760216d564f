// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions shared by the catalog, router and navigator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog entry.
///
/// Ids are positive, unique within one catalog and identical across
/// languages. They are never positions: the navigation order is the order
/// of the catalog, and an id says nothing about where its entry sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Normalize a route parameter into an id.
    ///
    /// Only the canonical decimal spelling is accepted: `"7"` matches entry
    /// 7 but `"07"`, `"+7"`, `" 7"` and `"0"` match nothing. A parameter that
    /// cannot be an id is an ordinary miss, so this returns `None` rather
    /// than an error.
    pub fn from_param(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<u32>().ok().map(EntryId)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Which catalog an entry belongs to. Determines the detail path segment
/// and where a reader goes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Projects,
    Experience,
}

impl CatalogKind {
    pub fn segment(self) -> &'static str {
        match self {
            CatalogKind::Projects => "projects",
            CatalogKind::Experience => "experience",
        }
    }

    pub fn all() -> &'static [CatalogKind] {
        &[CatalogKind::Projects, CatalogKind::Experience]
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Localized display fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Brief,
    Category,
    Date,
    SkillName,
}

impl Field {
    /// Fields an entry cannot be displayed without.
    pub const REQUIRED: [Field; 2] = [Field::Title, Field::Description];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Brief => "brief",
            Field::Category => "category",
            Field::Date => "date",
            Field::SkillName => "skill_name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Experience area icon. Configuration naming an unknown icon fails to
/// load instead of rendering a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Database,
    Cloud,
}

impl Icon {
    /// Terminal stand-in for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Database => "[db]",
            Icon::Cloud => "(~)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
    #[serde(alias = "Expert")]
    Expert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_normalization_accepts_canonical_ids() {
        assert_eq!(EntryId::from_param("1"), Some(EntryId::new(1)));
        assert_eq!(EntryId::from_param("42"), Some(EntryId::new(42)));
        assert_eq!(
            EntryId::from_param("4294967295"),
            Some(EntryId::new(u32::MAX))
        );
    }

    #[test]
    fn param_normalization_rejects_non_canonical_spellings() {
        for raw in ["", "0", "07", "+7", "-1", " 7", "7 ", "1.0", "abc", "4294967296"] {
            assert_eq!(EntryId::from_param(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn skill_levels_accept_capitalized_spelling() {
        let level: SkillLevel = serde_json::from_str("\"Advanced\"").unwrap();
        assert_eq!(level, SkillLevel::Advanced);
        let level: SkillLevel = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(level, SkillLevel::Expert);
    }

    #[test]
    fn unknown_icon_is_rejected() {
        assert!(serde_json::from_str::<Icon>("\"rocket\"").is_err());
        assert_eq!(serde_json::from_str::<Icon>("\"cloud\"").unwrap(), Icon::Cloud);
    }
}
