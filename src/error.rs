// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for catalog navigation.
//!
//! The first three variants are the navigation outcomes a caller recovers
//! from by redirecting to a safe default. The remaining variants only occur
//! while building a catalog from configuration.

use crate::i18n::Lang;
use crate::types::{CatalogKind, EntryId, Field};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavError {
    /// The route parameter names no entry in the catalog.
    #[error("no {kind} entry matches id {param:?}")]
    EntryNotFound { kind: CatalogKind, param: String },

    /// The entry exists but cannot be displayed in the requested language.
    #[error("entry {id} is missing {missing:?} for language {lang}")]
    LocalizationIncomplete {
        id: EntryId,
        lang: Lang,
        missing: Vec<Field>,
    },

    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: CatalogKind, id: EntryId },

    #[error("invalid {kind} id at position {position}: ids must be positive")]
    InvalidId { kind: CatalogKind, position: usize },
}

impl NavError {
    /// Whether the caller is expected to recover by redirecting.
    pub fn is_redirect(&self) -> bool {
        matches!(
            self,
            NavError::EntryNotFound { .. } | NavError::LocalizationIncomplete { .. }
        )
    }
}
