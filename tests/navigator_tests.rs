// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigator behaviour against hand-built and built-in catalogs

use folio_nav::catalog::{Catalog, CatalogEntry, LocalizedText, Lookup, Site};
use folio_nav::i18n::Lang;
use folio_nav::navigator::{Navigator, Outcome};
use folio_nav::router::{parse_path, Route};
use folio_nav::types::{CatalogKind, EntryId};
use folio_nav::NavError;

fn entry(id: u32) -> CatalogEntry {
    CatalogEntry::new(
        EntryId::new(id),
        LocalizedText::en_es(&format!("Project {id}"), &format!("Proyecto {id}")),
        LocalizedText::en_es("Description", "Descripción"),
    )
}

fn catalog(kind: CatalogKind, ids: &[u32]) -> Catalog {
    Catalog::new(kind, ids.iter().map(|&id| entry(id)).collect()).unwrap()
}

#[test]
fn test_scenario_interior_entry_default_language() {
    let projects = catalog(CatalogKind::Projects, &[1, 2, 3]);
    let nav = Navigator::new(&projects)
        .resolve("2", Lang::En)
        .into_result()
        .expect("id 2 should resolve");

    assert_eq!(nav.entry.id, EntryId::new(2));
    assert_eq!(nav.targets.index, 1);
    assert!(nav.targets.has_previous);
    assert!(nav.targets.has_next);
    assert_eq!(nav.targets.back_path, "/projects");
    assert_eq!(nav.targets.previous_path.as_deref(), Some("/projects/1"));
    assert_eq!(nav.targets.next_path.as_deref(), Some("/projects/3"));
}

#[test]
fn test_scenario_first_entry_spanish() {
    let projects = catalog(CatalogKind::Projects, &[1, 2, 3]);
    let nav = Navigator::new(&projects)
        .resolve("1", Lang::Es)
        .into_result()
        .expect("id 1 should resolve");

    assert_eq!(nav.targets.back_path, "/es/projects");
    assert!(!nav.targets.has_previous);
    assert_eq!(nav.targets.previous_path, None);
    assert_eq!(nav.targets.next_path.as_deref(), Some("/es/projects/2"));
}

#[test]
fn test_scenario_absent_id_redirects_to_list() {
    let projects = catalog(CatalogKind::Projects, &[1, 2, 3]);
    let navigator = Navigator::new(&projects);

    for lang in Lang::all() {
        match navigator.resolve("99", *lang) {
            Outcome::Redirect { reason, to } => {
                assert_eq!(
                    reason,
                    NavError::EntryNotFound {
                        kind: CatalogKind::Projects,
                        param: "99".into()
                    }
                );
                assert_eq!(to, Route::Projects.to_path(*lang));
            }
            other => panic!("expected redirect for id 99, got {other:?}"),
        }
    }
}

#[test]
fn test_lookup_finds_every_present_id() {
    let ids = [5, 17, 2, 40, 9];
    let projects = catalog(CatalogKind::Projects, &ids);
    for (position, id) in ids.iter().enumerate() {
        match projects.lookup_param(&id.to_string()) {
            Lookup::Found { entry, index } => {
                assert_eq!(entry.id, EntryId::new(*id));
                assert_eq!(index, position);
            }
            Lookup::NotFound => panic!("id {id} should be found"),
        }
    }
}

#[test]
fn test_lookup_misses_are_not_errors() {
    let projects = catalog(CatalogKind::Projects, &[1, 2, 3]);
    for raw in ["0", "4", "99", "-1", "abc", "", "1e3", "01"] {
        assert_eq!(projects.lookup_param(raw), Lookup::NotFound, "{raw:?}");
    }
}

#[test]
fn test_neighbours_for_every_position() {
    let ids = [8, 3, 21, 1, 13];
    let projects = catalog(CatalogKind::Projects, &ids);
    let navigator = Navigator::new(&projects);

    for (index, id) in ids.iter().enumerate() {
        let nav = navigator
            .resolve(&id.to_string(), Lang::En)
            .into_result()
            .unwrap();
        assert_eq!(nav.targets.index, index);
        assert_eq!(nav.targets.has_previous, index > 0);
        assert_eq!(nav.targets.has_next, index < ids.len() - 1);
        assert_eq!(
            nav.targets.previous_id,
            index.checked_sub(1).map(|i| EntryId::new(ids[i]))
        );
        assert_eq!(
            nav.targets.next_id,
            ids.get(index + 1).map(|&next| EntryId::new(next))
        );
    }
}

#[test]
fn test_every_path_round_trips_its_language() {
    let site = Site::builtin().unwrap();
    for &kind in CatalogKind::all() {
        let catalog = site.catalog(kind);
        let navigator = Navigator::new(catalog);
        for &lang in Lang::all() {
            for entry in catalog.entries() {
                let nav = navigator.resolve_id(entry.id, lang).into_result().unwrap();
                let mut paths = vec![nav.targets.back_path.clone()];
                paths.extend(nav.targets.previous_path.clone());
                paths.extend(nav.targets.next_path.clone());

                for path in paths {
                    let parsed = parse_path(&path);
                    assert_eq!(parsed.lang, lang, "{path}");
                    assert_eq!(
                        parsed.route_lang().is_some(),
                        !lang.is_default(),
                        "prefix presence for {path}"
                    );
                    assert_ne!(parsed.route, Route::NotFound, "{path}");
                    assert_eq!(parsed.canonical_path(), path);
                }
            }
        }
    }
}

#[test]
fn test_detail_paths_resolve_back_to_their_entry() {
    let site = Site::builtin().unwrap();
    let navigator = Navigator::new(&site.projects);
    let nav = navigator.resolve("2", Lang::Es).into_result().unwrap();

    let next = parse_path(nav.targets.next_path.as_deref().unwrap());
    let (kind, param) = next.route.detail_param().unwrap();
    assert_eq!(kind, CatalogKind::Projects);
    let next_nav = navigator.resolve(param, next.lang).into_result().unwrap();
    assert_eq!(next_nav.entry.id, EntryId::new(3));
    assert_eq!(next_nav.targets.previous_path.as_deref(), Some("/es/projects/2"));
}

#[test]
fn test_missing_translation_is_not_a_missing_entry() {
    let mut partial = entry(2);
    partial.description = LocalizedText::new().with(Lang::En, "English only");
    let projects =
        Catalog::new(CatalogKind::Projects, vec![entry(1), partial, entry(3)]).unwrap();
    let navigator = Navigator::new(&projects);

    assert!(navigator.resolve("2", Lang::En).resolved().is_some());
    let err = navigator.resolve("2", Lang::Es).into_result().unwrap_err();
    assert!(matches!(err, NavError::LocalizationIncomplete { lang: Lang::Es, .. }));
    assert!(err.is_redirect());

    // Neighbours still link to the untranslated entry; it is the page that
    // redirects, not the link that disappears.
    let nav = navigator.resolve("1", Lang::Es).into_result().unwrap();
    assert_eq!(nav.targets.next_path.as_deref(), Some("/es/projects/2"));
}

#[test]
fn test_builtin_experience_view() {
    let site = Site::builtin().unwrap();
    let nav = Navigator::new(&site.experience)
        .resolve("2", Lang::Es)
        .into_result()
        .unwrap();
    let view = nav.view();
    assert_eq!(view.title, "Arquitectura de Datos");
    assert_eq!(view.years, Some(6));
    assert_eq!(view.skills[0].name, "Modelado de Datos");
    assert_eq!(nav.targets.back_path, "/es");
    assert_eq!(nav.targets.previous_path.as_deref(), Some("/es/experience/1"));
    assert_eq!(nav.targets.next_path.as_deref(), Some("/es/experience/3"));
}
