// SPDX-License-Identifier: PMPL-1.0-or-later

//! Route table and the language-prefix policy.
//!
//! | Path                                          | Route                |
//! |-----------------------------------------------|----------------------|
//! | `/`, `/{lang}`                                | [`Route::Home`]      |
//! | `/projects`, `/{lang}/projects`               | [`Route::Projects`]  |
//! | `/projects/{id}`, `/{lang}/projects/{id}`     | [`Route::ProjectDetail`] |
//! | `/contact`, `/{lang}/contact`                 | [`Route::Contact`]   |
//! | `/experience/{id}`, `/{lang}/experience/{id}` | [`Route::ExperienceDetail`] |
//! | anything else                                 | [`Route::NotFound`] (redirects home) |
//!
//! [`localized_path`] is the only place a language prefix is written, and
//! [`parse_path`] the only place one is read. The default language never
//! carries a prefix; every other supported language always does.

use crate::i18n::Lang;
use crate::types::{CatalogKind, EntryId};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "param", rename_all = "snake_case")]
pub enum Route {
    Home,
    Projects,
    /// Raw id parameter, normalized later by the catalog lookup.
    ProjectDetail(String),
    Contact,
    ExperienceDetail(String),
    NotFound,
}

impl Route {
    pub fn detail(kind: CatalogKind, id: EntryId) -> Route {
        match kind {
            CatalogKind::Projects => Route::ProjectDetail(id.to_string()),
            CatalogKind::Experience => Route::ExperienceDetail(id.to_string()),
        }
    }

    /// Where "back" leads from a detail page, and where a failed lookup
    /// redirects. Experience has no list page, so it returns home.
    pub fn back_from(kind: CatalogKind) -> Route {
        match kind {
            CatalogKind::Projects => Route::Projects,
            CatalogKind::Experience => Route::Home,
        }
    }

    pub fn detail_param(&self) -> Option<(CatalogKind, &str)> {
        match self {
            Route::ProjectDetail(param) => Some((CatalogKind::Projects, param)),
            Route::ExperienceDetail(param) => Some((CatalogKind::Experience, param)),
            _ => None,
        }
    }

    /// The route a reader is sent to instead of this one, if any.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Route::NotFound => Some(Route::Home),
            _ => None,
        }
    }

    /// Canonical path of this route in `lang`. [`Route::NotFound`] formats
    /// as its redirect target.
    pub fn to_path(&self, lang: Lang) -> String {
        match self {
            Route::Home | Route::NotFound => localized_path(lang, &[]),
            Route::Projects => localized_path(lang, &["projects"]),
            Route::ProjectDetail(param) => localized_path(lang, &["projects", param]),
            Route::Contact => localized_path(lang, &["contact"]),
            Route::ExperienceDetail(param) => localized_path(lang, &["experience", param]),
        }
    }
}

/// Join path segments under the language prefix policy.
pub fn localized_path(lang: Lang, segments: &[&str]) -> String {
    let mut path = String::new();
    if !lang.is_default() {
        path.push('/');
        path.push_str(lang.code());
    }
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    pub lang: Lang,
    pub route: Route,
    /// The path spelled out a language segment, including a redundant
    /// default-language one such as `/en/projects`.
    pub explicit_lang: bool,
}

impl ParsedPath {
    /// Language carried by the path, for seeding the session language.
    /// `None` when the path had no prefix.
    pub fn route_lang(&self) -> Option<Lang> {
        self.explicit_lang.then_some(self.lang)
    }

    pub fn canonical_path(&self) -> String {
        self.route.to_path(self.lang)
    }
}

/// Split a URL path into language and route.
///
/// Query strings and fragments are ignored, as are empty segments, so
/// `/es//projects/` parses like `/es/projects`. A first segment that is not
/// a supported language code is an ordinary path segment, which means
/// `/fr/projects` is simply not found.
pub fn parse_path(path: &str) -> ParsedPath {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let prefix = segments.first().and_then(|first| Lang::from_code(first));
    if prefix.is_some() {
        segments.remove(0);
    }
    let lang = prefix.unwrap_or_default();

    let route = match segments.as_slice() {
        [] => Route::Home,
        ["projects"] => Route::Projects,
        ["projects", id] => Route::ProjectDetail((*id).to_string()),
        ["contact"] => Route::Contact,
        ["experience", id] => Route::ExperienceDetail((*id).to_string()),
        _ => Route::NotFound,
    };
    if route == Route::NotFound {
        debug!(path, "no route matches");
    }

    ParsedPath {
        lang,
        route,
        explicit_lang: prefix.is_some(),
    }
}

/// The path a language selector leads to: the same page in `lang`.
pub fn switch_language(path: &str, lang: Lang) -> String {
    parse_path(path).route.to_path(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_paths_are_unprefixed() {
        assert_eq!(localized_path(Lang::En, &[]), "/");
        assert_eq!(localized_path(Lang::En, &["projects", "3"]), "/projects/3");
    }

    #[test]
    fn other_languages_are_prefixed() {
        assert_eq!(localized_path(Lang::Es, &[]), "/es");
        assert_eq!(localized_path(Lang::Es, &["projects"]), "/es/projects");
    }

    #[test]
    fn parses_every_route_shape() {
        let cases = [
            ("/", Lang::En, Route::Home),
            ("/es", Lang::Es, Route::Home),
            ("/projects", Lang::En, Route::Projects),
            ("/es/projects", Lang::Es, Route::Projects),
            ("/projects/2", Lang::En, Route::ProjectDetail("2".into())),
            ("/es/projects/2", Lang::Es, Route::ProjectDetail("2".into())),
            ("/contact", Lang::En, Route::Contact),
            ("/es/contact", Lang::Es, Route::Contact),
            ("/experience/1", Lang::En, Route::ExperienceDetail("1".into())),
            ("/es/experience/1", Lang::Es, Route::ExperienceDetail("1".into())),
        ];
        for (path, lang, route) in cases {
            let parsed = parse_path(path);
            assert_eq!(parsed.lang, lang, "{path}");
            assert_eq!(parsed.route, route, "{path}");
            assert_eq!(parsed.canonical_path(), path);
        }
    }

    #[test]
    fn unknown_prefix_is_not_a_language() {
        let parsed = parse_path("/fr/projects");
        assert_eq!(parsed.lang, Lang::En);
        assert_eq!(parsed.route, Route::NotFound);
        assert_eq!(parsed.route_lang(), None);
        assert_eq!(parsed.canonical_path(), "/");
    }

    #[test]
    fn unknown_path_redirects_home_in_its_language() {
        let parsed = parse_path("/es/blog/post");
        assert_eq!(parsed.route, Route::NotFound);
        assert_eq!(parsed.route.redirect(), Some(Route::Home));
        assert_eq!(parsed.canonical_path(), "/es");
    }

    #[test]
    fn explicit_default_prefix_is_canonicalized() {
        let parsed = parse_path("/en/projects/1");
        assert_eq!(parsed.route_lang(), Some(Lang::En));
        assert_eq!(parsed.canonical_path(), "/projects/1");
    }

    #[test]
    fn noise_is_ignored() {
        assert_eq!(parse_path("/es//projects/").route, Route::Projects);
        assert_eq!(
            parse_path("/projects/3?ref=home#top").route,
            Route::ProjectDetail("3".into())
        );
        assert_eq!(parse_path("").route, Route::Home);
    }

    #[test]
    fn switching_language_keeps_the_page() {
        assert_eq!(switch_language("/projects/2", Lang::Es), "/es/projects/2");
        assert_eq!(switch_language("/es/contact", Lang::En), "/contact");
        assert_eq!(switch_language("/es", Lang::En), "/");
        assert_eq!(switch_language("/nowhere", Lang::Es), "/es");
    }

    #[test]
    fn experience_goes_back_home() {
        assert_eq!(Route::back_from(CatalogKind::Experience), Route::Home);
        assert_eq!(Route::back_from(CatalogKind::Projects), Route::Projects);
    }
}
