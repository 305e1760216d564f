// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog store: ordered, immutable collections of displayable entries.
//!
//! A catalog is built once and only read afterwards. The order of the
//! entries is the navigation order; ids are lookup keys and nothing more.
//! An id→position map is built at construction so lookups stay O(1).

mod builtin;
mod config;

pub use builtin::{builtin_experiences, builtin_projects};
pub use config::{Site, SiteConfig, CONFIG_ENV};

use crate::error::NavError;
use crate::i18n::Lang;
use crate::types::{CatalogKind, EntryId, Field, Icon, SkillLevel};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// One display string per supported language.
///
/// Blank strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Lang, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same text in English and Spanish, the shape all built-in
    /// content takes.
    pub fn en_es(en: &str, es: &str) -> Self {
        Self::new().with(Lang::En, en).with(Lang::Es, es)
    }

    pub fn with(mut self, lang: Lang, text: impl Into<String>) -> Self {
        self.0.insert(lang, text.into());
        self
    }

    pub fn get(&self, lang: Lang) -> Option<&str> {
        self.0
            .get(&lang)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    pub fn has(&self, lang: Lang) -> bool {
        self.get(lang).is_some()
    }

    /// No language has usable text.
    pub fn is_empty(&self) -> bool {
        !Lang::all().iter().any(|lang| self.has(*lang))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

impl Skill {
    pub fn new(name: LocalizedText, level: SkillLevel) -> Self {
        Self {
            name,
            level: Some(level),
        }
    }
}

/// A project or experience entry.
///
/// Experiences call their title the "area"; configuration may use either
/// key. Every text field defaults to empty so that an untranslated entry
/// still loads and is reported by the navigator instead of failing the
/// whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    #[serde(default, alias = "area")]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub brief: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub category: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub date: LocalizedText,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, alias = "liveUrl", skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, alias = "repoUrl", skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl CatalogEntry {
    pub fn new(id: EntryId, title: LocalizedText, description: LocalizedText) -> Self {
        Self {
            id,
            title,
            description,
            brief: LocalizedText::new(),
            category: LocalizedText::new(),
            date: LocalizedText::new(),
            skills: Vec::new(),
            live_url: None,
            repo_url: None,
            image: None,
            years: None,
            icon: None,
        }
    }

    pub fn with_brief(mut self, brief: LocalizedText) -> Self {
        self.brief = brief;
        self
    }

    pub fn with_category(mut self, category: LocalizedText) -> Self {
        self.category = category;
        self
    }

    pub fn with_date(mut self, date: LocalizedText) -> Self {
        self.date = date;
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn text(&self, field: Field) -> Option<&LocalizedText> {
        match field {
            Field::Title => Some(&self.title),
            Field::Description => Some(&self.description),
            Field::Brief => Some(&self.brief),
            Field::Category => Some(&self.category),
            Field::Date => Some(&self.date),
            Field::SkillName => None,
        }
    }

    /// Required fields with no text in `lang`, in declaration order.
    pub fn missing_required(&self, lang: Lang) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| self.text(*field).map_or(true, |text| !text.has(lang)))
            .collect()
    }
}

/// Result of a catalog lookup. A miss is an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found { entry: &'a CatalogEntry, index: usize },
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<(&'a CatalogEntry, usize)> {
        match self {
            Lookup::Found { entry, index } => Some((entry, index)),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }
}

/// A localized field an entry lacks in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub id: EntryId,
    pub lang: Lang,
    pub field: Field,
    /// Position of the skill when `field` is [`Field::SkillName`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<usize>,
}

impl Gap {
    /// Whether the gap stops the entry from being displayed at all.
    pub fn is_blocking(&self) -> bool {
        Field::REQUIRED.contains(&self.field)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    entries: Vec<CatalogEntry>,
    positions: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting zero and duplicate ids.
    pub fn new(kind: CatalogKind, entries: Vec<CatalogEntry>) -> Result<Self, NavError> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.get() == 0 {
                return Err(NavError::InvalidId { kind, position });
            }
            if positions.insert(entry.id, position).is_some() {
                return Err(NavError::DuplicateId { kind, id: entry.id });
            }
        }
        debug!(kind = %kind, entries = entries.len(), "catalog loaded");
        Ok(Self {
            kind,
            entries,
            positions,
        })
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn at(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn lookup(&self, id: EntryId) -> Lookup<'_> {
        match self.positions.get(&id) {
            Some(&index) => Lookup::Found {
                entry: &self.entries[index],
                index,
            },
            None => Lookup::NotFound,
        }
    }

    /// Look up by raw route parameter, normalized with
    /// [`EntryId::from_param`].
    pub fn lookup_param(&self, raw: &str) -> Lookup<'_> {
        match EntryId::from_param(raw) {
            Some(id) => self.lookup(id),
            None => Lookup::NotFound,
        }
    }

    /// Every localized field missing from an entry in some language.
    ///
    /// Required fields are always checked. Optional fields only count as
    /// missing when another language has them, so a project without a
    /// brief anywhere is not flagged.
    pub fn audit(&self) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for entry in &self.entries {
            for &lang in Lang::all() {
                for field in [
                    Field::Title,
                    Field::Description,
                    Field::Brief,
                    Field::Category,
                    Field::Date,
                ] {
                    let Some(text) = entry.text(field) else {
                        continue;
                    };
                    let required = Field::REQUIRED.contains(&field);
                    if !text.has(lang) && (required || !text.is_empty()) {
                        gaps.push(Gap {
                            id: entry.id,
                            lang,
                            field,
                            skill: None,
                        });
                    }
                }
                for (position, skill) in entry.skills.iter().enumerate() {
                    if !skill.name.has(lang) {
                        gaps.push(Gap {
                            id: entry.id,
                            lang,
                            field: Field::SkillName,
                            skill: Some(position),
                        });
                    }
                }
            }
        }
        gaps
    }
}
