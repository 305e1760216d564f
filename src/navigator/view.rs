// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized, display-ready projection of a catalog entry.

use crate::catalog::{CatalogEntry, LocalizedText};
use crate::error::NavError;
use crate::i18n::{t, Lang, UiText};
use crate::types::{EntryId, Icon, SkillLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    /// Level label in the view's language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub id: EntryId,
    pub lang: Lang,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub skills: Vec<SkillView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl EntryView {
    /// Project `entry` into `lang`, failing with
    /// [`NavError::LocalizationIncomplete`] when a required field is absent.
    pub fn try_build(entry: &CatalogEntry, lang: Lang) -> Result<Self, NavError> {
        let missing = entry.missing_required(lang);
        if !missing.is_empty() {
            return Err(NavError::LocalizationIncomplete {
                id: entry.id,
                lang,
                missing,
            });
        }
        Ok(Self::build(entry, lang))
    }

    /// Project an entry whose required fields are known to be present.
    pub(super) fn build(entry: &CatalogEntry, lang: Lang) -> Self {
        let text = |field: &LocalizedText| field.get(lang).map(str::to_string);

        // Skill names fall back to the default language; a skill with no
        // name at all is left out.
        let skills = entry
            .skills
            .iter()
            .filter_map(|skill| {
                let name = skill.name.get(lang).or_else(|| skill.name.get(Lang::DEFAULT))?;
                Some(SkillView {
                    name: name.to_string(),
                    level: skill.level,
                    level_label: skill.level.map(|level| t(lang, UiText::for_level(level))),
                })
            })
            .collect();

        Self {
            id: entry.id,
            lang,
            title: text(&entry.title).unwrap_or_default(),
            description: text(&entry.description).unwrap_or_default(),
            brief: text(&entry.brief),
            category: text(&entry.category),
            date: text(&entry.date),
            skills,
            live_url: entry.live_url.clone(),
            repo_url: entry.repo_url.clone(),
            image: entry.image.clone(),
            years: entry.years,
            icon: entry.icon,
        }
    }
}
