// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration: the static content the catalogs are built from.
//!
//! A configuration file is YAML (`.yaml`/`.yml`) or JSON (`.json`). It
//! replaces the built-in content wholesale; a section left out of the file
//! yields an empty catalog.

use super::{builtin_experiences, builtin_projects, Catalog, CatalogEntry};
use crate::types::CatalogKind;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Environment variable consulted when no `--config` is passed.
pub const CONFIG_ENV: &str = "FOLIO_NAV_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub projects: Vec<CatalogEntry>,
    #[serde(default)]
    pub experiences: Vec<CatalogEntry>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading site config {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let config: SiteConfig = match ext.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing YAML site config {}", path.display()))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing JSON site config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported site config extension for {} (expected .yaml, .yml or .json)",
                    path.display()
                ))
            }
        };
        Ok(config)
    }
}

/// Both catalogs of the site, validated and ready to navigate.
#[derive(Debug, Clone)]
pub struct Site {
    pub projects: Catalog,
    pub experience: Catalog,
}

impl Site {
    pub fn builtin() -> Result<Self> {
        Self::from_config(SiteConfig {
            projects: builtin_projects(),
            experiences: builtin_experiences(),
        })
    }

    pub fn from_config(config: SiteConfig) -> Result<Self> {
        Ok(Self {
            projects: Catalog::new(CatalogKind::Projects, config.projects)?,
            experience: Catalog::new(CatalogKind::Experience, config.experiences)?,
        })
    }

    /// Load from `path`, or fall back to the built-in content.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let site = Self::from_config(SiteConfig::load(path)?)
                    .with_context(|| format!("validating site config {}", path.display()))?;
                info!(
                    config = %path.display(),
                    projects = site.projects.len(),
                    experience = site.experience.len(),
                    "site config loaded"
                );
                Ok(site)
            }
            None => Self::builtin(),
        }
    }

    pub fn catalog(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Projects => &self.projects,
            CatalogKind::Experience => &self.experience,
        }
    }
}
