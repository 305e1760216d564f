// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog navigator.
//!
//! Turns `(catalog, route parameter, language)` into either a displayable
//! entry with its back/previous/next targets, or a redirect. Neither an
//! unknown id nor a missing translation is a failure here; both come back
//! as [`Outcome::Redirect`] carrying the reason and the path to go to.
//!
//! Position and id are kept apart throughout: previous/next are the
//! entries *adjacent in catalog order*, addressed by *their* ids.

mod session;
mod view;

pub use session::{DetailSession, SessionState};
pub use view::{EntryView, SkillView};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::NavError;
use crate::i18n::Lang;
use crate::router::Route;
use crate::types::{CatalogKind, EntryId};
use serde::Serialize;
use tracing::debug;

/// Position and navigation targets of a resolved entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTargets {
    pub id: EntryId,
    pub index: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_id: Option<EntryId>,
    pub next_id: Option<EntryId>,
    pub back_path: String,
    pub previous_path: Option<String>,
    pub next_path: Option<String>,
}

/// A resolved entry, ready to display in `lang`.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<'a> {
    pub entry: &'a CatalogEntry,
    pub lang: Lang,
    pub targets: NavTargets,
}

impl Navigation<'_> {
    /// Display strings for the entry. Required fields were checked during
    /// resolution, so this cannot fail.
    pub fn view(&self) -> EntryView {
        EntryView::build(self.entry, self.lang)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    Resolved(Navigation<'a>),
    /// `reason` is [`NavError::EntryNotFound`] or
    /// [`NavError::LocalizationIncomplete`].
    Redirect { reason: NavError, to: String },
}

impl<'a> Outcome<'a> {
    pub fn into_result(self) -> Result<Navigation<'a>, NavError> {
        match self {
            Outcome::Resolved(navigation) => Ok(navigation),
            Outcome::Redirect { reason, .. } => Err(reason),
        }
    }

    pub fn resolved(&self) -> Option<&Navigation<'a>> {
        match self {
            Outcome::Resolved(navigation) => Some(navigation),
            Outcome::Redirect { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Navigator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn kind(&self) -> CatalogKind {
        self.catalog.kind()
    }

    /// Back target for this catalog in `lang`; also where misses redirect.
    pub fn back_path(&self, lang: Lang) -> String {
        Route::back_from(self.kind()).to_path(lang)
    }

    fn detail_path(&self, id: EntryId, lang: Lang) -> String {
        Route::detail(self.kind(), id).to_path(lang)
    }

    /// Resolve a raw route parameter in `lang`.
    pub fn resolve(&self, param: &str, lang: Lang) -> Outcome<'a> {
        let Some((entry, index)) = self.catalog.lookup_param(param).found() else {
            debug!(kind = %self.kind(), param, "entry not found");
            return Outcome::Redirect {
                reason: NavError::EntryNotFound {
                    kind: self.kind(),
                    param: param.to_string(),
                },
                to: self.back_path(lang),
            };
        };

        let missing = entry.missing_required(lang);
        if !missing.is_empty() {
            debug!(
                kind = %self.kind(),
                id = %entry.id,
                lang = %lang,
                ?missing,
                "entry not displayable"
            );
            return Outcome::Redirect {
                reason: NavError::LocalizationIncomplete {
                    id: entry.id,
                    lang,
                    missing,
                },
                to: self.back_path(lang),
            };
        }

        Outcome::Resolved(Navigation {
            entry,
            lang,
            targets: self.targets(entry.id, index, lang),
        })
    }

    /// Resolve an already-typed id.
    pub fn resolve_id(&self, id: EntryId, lang: Lang) -> Outcome<'a> {
        self.resolve(&id.to_string(), lang)
    }

    fn targets(&self, id: EntryId, index: usize, lang: Lang) -> NavTargets {
        let previous_id = index
            .checked_sub(1)
            .and_then(|i| self.catalog.at(i))
            .map(|entry| entry.id);
        let next_id = self.catalog.at(index + 1).map(|entry| entry.id);

        NavTargets {
            id,
            index,
            has_previous: previous_id.is_some(),
            has_next: next_id.is_some(),
            previous_id,
            next_id,
            back_path: self.back_path(lang),
            previous_path: previous_id.map(|id| self.detail_path(id, lang)),
            next_path: next_id.map(|id| self.detail_path(id, lang)),
        }
    }
}
