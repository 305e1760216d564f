// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading site content from YAML and JSON configuration

use folio_nav::catalog::{Site, SiteConfig};
use folio_nav::i18n::Lang;
use folio_nav::navigator::{Navigator, Outcome};
use folio_nav::report::{generate_audit, generate_resolve_report, ResolveOutcome};
use folio_nav::types::{CatalogKind, EntryId, Field, Icon};
use folio_nav::NavError;
use std::fs;
use tempfile::TempDir;

const YAML_SITE: &str = r#"
projects:
  - id: 10
    title: { en: "Compiler", es: "Compilador" }
    description: { en: "A toy compiler", es: "Un compilador de juguete" }
    date: { en: "June 2024", es: "Junio 2024" }
    repoUrl: "https://example.com/compiler"
    skills:
      - name: { en: "Parsing", es: "Análisis sintáctico" }
        level: Expert
  - id: 4
    title: { en: "Scheduler", es: "Planificador" }
    description: { en: "Work stealing", es: "Robo de trabajo" }
experiences:
  - id: 1
    area: { en: "Development", es: "Desarrollo" }
    description: { en: "APIs", es: "APIs" }
    years: 8
    icon: code
"#;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_yaml_config_replaces_builtin_content() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "site.yaml", YAML_SITE);

    let site = Site::load(Some(path.as_path())).expect("yaml site should load");
    assert_eq!(site.projects.len(), 2);
    assert_eq!(site.experience.len(), 1);
    assert_eq!(site.experience.entries()[0].icon, Some(Icon::Code));

    let nav = Navigator::new(&site.projects)
        .resolve("10", Lang::Es)
        .into_result()
        .unwrap();
    assert_eq!(nav.targets.index, 0);
    assert_eq!(nav.targets.next_path.as_deref(), Some("/es/projects/4"));
    assert_eq!(nav.view().repo_url.as_deref(), Some("https://example.com/compiler"));
}

#[test]
fn test_json_config_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "site.json",
        r#"{ "projects": [ { "id": 1, "title": { "en": "One", "es": "Uno" },
             "description": { "en": "First", "es": "Primero" } } ] }"#,
    );

    let site = Site::load(Some(path.as_path())).unwrap();
    assert_eq!(site.projects.len(), 1);
    assert!(site.experience.is_empty());
}

#[test]
fn test_duplicate_ids_fail_to_load() {
    let config: SiteConfig = serde_yaml::from_str(
        r#"
projects:
  - id: 1
    title: { en: "A", es: "A" }
  - id: 1
    title: { en: "B", es: "B" }
"#,
    )
    .unwrap();

    let err = Site::from_config(config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<NavError>(),
        Some(&NavError::DuplicateId {
            kind: CatalogKind::Projects,
            id: EntryId::new(1)
        })
    );
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "site.toml", "projects = []");
    let err = Site::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("unsupported site config extension"));
}

#[test]
fn test_unknown_language_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "site.yaml",
        "projects:\n  - id: 1\n    title: { en: \"A\", fr: \"A\" }\n",
    );
    assert!(Site::load(Some(path.as_path())).is_err());
}

#[test]
fn test_untranslated_entry_loads_but_redirects() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "site.yaml",
        r#"
projects:
  - id: 1
    title: { en: "Draft" }
    description: { en: "Not yet translated" }
"#,
    );
    let site = Site::load(Some(path.as_path())).unwrap();

    match Navigator::new(&site.projects).resolve("1", Lang::Es) {
        Outcome::Redirect { reason, to } => {
            assert_eq!(to, "/es/projects");
            assert_eq!(
                reason,
                NavError::LocalizationIncomplete {
                    id: EntryId::new(1),
                    lang: Lang::Es,
                    missing: vec![Field::Title, Field::Description],
                }
            );
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    let audit = generate_audit(&site);
    assert_eq!(audit.blocking(), 2);

    let report = generate_resolve_report(&site, "/projects/1");
    assert!(matches!(report.outcome, ResolveOutcome::Detail { .. }));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = Site::load(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("absent.yaml"));
}
