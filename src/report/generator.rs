// SPDX-License-Identifier: PMPL-1.0-or-later

//! Builds the reports the CLI prints: what a URL resolves to, what a
//! catalog lists, and what translations are missing.

use crate::catalog::{Gap, Site};
use crate::error::NavError;
use crate::i18n::{Lang, LanguageState};
use crate::navigator::{EntryView, NavTargets, Navigator, Outcome};
use crate::router::{parse_path, switch_language, Route};
use crate::types::{CatalogKind, EntryId};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveReport {
    pub input: String,
    pub lang: Lang,
    pub route: Route,
    pub canonical_path: String,
    #[serde(flatten)]
    pub outcome: ResolveOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolveOutcome {
    /// A page with no catalog lookup (home, project list, contact).
    Page,
    Detail {
        kind: CatalogKind,
        targets: NavTargets,
        view: EntryView,
    },
    Redirect {
        to: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<NavError>,
    },
}

/// Run a URL through the router, the language state and the navigator,
/// the way a page mount does.
pub fn generate_resolve_report(site: &Site, path: &str) -> ResolveReport {
    let parsed = parse_path(path);
    let language = LanguageState::from_route(parsed.route_lang());
    let lang = language.get();

    let outcome = if let Some(home) = parsed.route.redirect() {
        ResolveOutcome::Redirect {
            to: home.to_path(lang),
            reason: None,
        }
    } else if let Some((kind, param)) = parsed.route.detail_param() {
        match Navigator::new(site.catalog(kind)).resolve(param, lang) {
            Outcome::Resolved(navigation) => ResolveOutcome::Detail {
                kind,
                view: navigation.view(),
                targets: navigation.targets,
            },
            Outcome::Redirect { reason, to } => ResolveOutcome::Redirect {
                to,
                reason: Some(reason),
            },
        }
    } else {
        ResolveOutcome::Page
    };
    debug!(path, lang = %lang, ?outcome, "resolved");

    ResolveReport {
        input: path.to_string(),
        lang,
        canonical_path: parsed.canonical_path(),
        route: parsed.route,
        outcome,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchReport {
    pub from: String,
    pub from_lang: Lang,
    pub to: String,
    pub to_lang: Lang,
    /// `false` when the selected language was already active.
    pub changed: bool,
}

/// Apply the language selector to the page at `path`. The page's own
/// prefix seeds the current language; an unsupported `code` is an error.
pub fn generate_switch_report(path: &str, code: &str) -> Result<SwitchReport, NavError> {
    let parsed = parse_path(path);
    let mut language = LanguageState::from_route(parsed.route_lang());
    let from_lang = language.get();
    let changed = language.set(code).map(|to_lang| to_lang != from_lang)?;
    let to_lang = language.get();

    Ok(SwitchReport {
        from: parsed.canonical_path(),
        from_lang,
        to: switch_language(path, to_lang),
        to_lang,
        changed,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub index: usize,
    pub id: EntryId,
    /// `None` when the entry has no title in the listing language.
    pub title: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingReport {
    pub kind: CatalogKind,
    pub lang: Lang,
    pub entries: Vec<ListingRow>,
}

pub fn generate_listing(site: &Site, kind: CatalogKind, lang: Lang) -> ListingReport {
    let entries = site
        .catalog(kind)
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| ListingRow {
            index,
            id: entry.id,
            title: entry.title.get(lang).map(str::to_string),
            path: Route::detail(kind, entry.id).to_path(lang),
        })
        .collect();
    ListingReport {
        kind,
        lang,
        entries,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRow {
    pub kind: CatalogKind,
    #[serde(flatten)]
    pub gap: Gap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub entries_checked: usize,
    pub gaps: Vec<AuditRow>,
}

impl AuditReport {
    /// Gaps that make an entry undisplayable in some language.
    pub fn blocking(&self) -> usize {
        self.gaps.iter().filter(|row| row.gap.is_blocking()).count()
    }

    /// No entry is missing any localized field.
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty()
    }
}

pub fn generate_audit(site: &Site) -> AuditReport {
    let mut entries_checked = 0;
    let mut gaps = Vec::new();
    for &kind in CatalogKind::all() {
        let catalog = site.catalog(kind);
        entries_checked += catalog.len();
        gaps.extend(catalog.audit().into_iter().map(|gap| AuditRow { kind, gap }));
    }
    AuditReport {
        entries_checked,
        gaps,
    }
}
