// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interface string catalog.
//!
//! Every string the site chrome shows is a [`UiText`] variant, and each
//! language's table is an exhaustive `match`. A missing translation is a
//! compile error, so lookups have no fallback path.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] (after the default)
//! 2. Add its arms to `Lang::code()`, `Lang::from_code()` and `Lang::native_name()`
//! 3. Write its table function below and add it to [`t`]
//!
//! ## Adding a new string
//!
//! Add the variant to [`UiText`] and to `UiText::ALL`; the compiler then
//! points at every table that needs the translation.

use crate::error::NavError;
use crate::types::SkillLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages.
///
/// The first variant is the default: its paths carry no language prefix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::En;

    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Case-sensitive: route prefixes and selector values are lowercase.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// All supported languages, default first.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es]
    }

    /// Language name written in the language itself, for the selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Lang::DEFAULT
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::DEFAULT
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| NavError::UnsupportedLanguage(s.to_string()))
    }
}

/// Interface strings shown around catalog content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiText {
    Home,
    Projects,
    Contact,
    BackToProjects,
    BackToHome,
    Previous,
    Next,
    LoadingProject,
    LoadingExperience,
    ProjectOverview,
    ProjectDetails,
    ExperienceOverview,
    YearsExperience,
    SkillsTechnologies,
    Date,
    Category,
    ViewLiveSite,
    ViewRepository,
    Language,
    LevelBeginner,
    LevelIntermediate,
    LevelAdvanced,
    LevelExpert,
    ErrorTitle,
    ErrorBody,
    Reload,
}

impl UiText {
    pub const ALL: [UiText; 26] = [
        UiText::Home,
        UiText::Projects,
        UiText::Contact,
        UiText::BackToProjects,
        UiText::BackToHome,
        UiText::Previous,
        UiText::Next,
        UiText::LoadingProject,
        UiText::LoadingExperience,
        UiText::ProjectOverview,
        UiText::ProjectDetails,
        UiText::ExperienceOverview,
        UiText::YearsExperience,
        UiText::SkillsTechnologies,
        UiText::Date,
        UiText::Category,
        UiText::ViewLiveSite,
        UiText::ViewRepository,
        UiText::Language,
        UiText::LevelBeginner,
        UiText::LevelIntermediate,
        UiText::LevelAdvanced,
        UiText::LevelExpert,
        UiText::ErrorTitle,
        UiText::ErrorBody,
        UiText::Reload,
    ];

    pub fn for_level(level: SkillLevel) -> UiText {
        match level {
            SkillLevel::Beginner => UiText::LevelBeginner,
            SkillLevel::Intermediate => UiText::LevelIntermediate,
            SkillLevel::Advanced => UiText::LevelAdvanced,
            SkillLevel::Expert => UiText::LevelExpert,
        }
    }
}

/// Look up an interface string in the given language.
///
/// # Examples
///
/// ```
/// use folio_nav::i18n::{t, Lang, UiText};
/// assert_eq!(t(Lang::En, UiText::Next), "Next");
/// assert_eq!(t(Lang::Es, UiText::Next), "Siguiente");
/// ```
pub fn t(lang: Lang, text: UiText) -> &'static str {
    match lang {
        Lang::En => en(text),
        Lang::Es => es(text),
    }
}

// ─── English ────────────────────────────────────────────────────────

fn en(text: UiText) -> &'static str {
    match text {
        UiText::Home => "Home",
        UiText::Projects => "Projects",
        UiText::Contact => "Contact",
        UiText::BackToProjects => "Back to Projects",
        UiText::BackToHome => "Back to Home",
        UiText::Previous => "Previous",
        UiText::Next => "Next",
        UiText::LoadingProject => "Loading project...",
        UiText::LoadingExperience => "Loading experience...",
        UiText::ProjectOverview => "Project Overview",
        UiText::ProjectDetails => "Project Details",
        UiText::ExperienceOverview => "Experience Overview",
        UiText::YearsExperience => "Years of Experience",
        UiText::SkillsTechnologies => "Skills & Technologies",
        UiText::Date => "Date",
        UiText::Category => "Category",
        UiText::ViewLiveSite => "View Live Site",
        UiText::ViewRepository => "View Repository",
        UiText::Language => "Language",
        UiText::LevelBeginner => "Beginner",
        UiText::LevelIntermediate => "Intermediate",
        UiText::LevelAdvanced => "Advanced",
        UiText::LevelExpert => "Expert",
        UiText::ErrorTitle => "Oops! Something went wrong",
        UiText::ErrorBody => "We're sorry for the inconvenience. Please try again.",
        UiText::Reload => "Reload",
    }
}

// ─── Spanish ────────────────────────────────────────────────────────

fn es(text: UiText) -> &'static str {
    match text {
        UiText::Home => "Inicio",
        UiText::Projects => "Proyectos",
        UiText::Contact => "Contacto",
        UiText::BackToProjects => "Volver a Proyectos",
        UiText::BackToHome => "Volver al Inicio",
        UiText::Previous => "Anterior",
        UiText::Next => "Siguiente",
        UiText::LoadingProject => "Cargando proyecto...",
        UiText::LoadingExperience => "Cargando experiencia...",
        UiText::ProjectOverview => "Descripción del Proyecto",
        UiText::ProjectDetails => "Detalles del Proyecto",
        UiText::ExperienceOverview => "Resumen de Experiencia",
        UiText::YearsExperience => "Años de Experiencia",
        UiText::SkillsTechnologies => "Habilidades y Tecnologías",
        UiText::Date => "Fecha",
        UiText::Category => "Categoría",
        UiText::ViewLiveSite => "Ver Sitio en Vivo",
        UiText::ViewRepository => "Ver Repositorio",
        UiText::Language => "Idioma",
        UiText::LevelBeginner => "Principiante",
        UiText::LevelIntermediate => "Intermedio",
        UiText::LevelAdvanced => "Avanzado",
        UiText::LevelExpert => "Experto",
        UiText::ErrorTitle => "¡Ups! Algo salió mal",
        UiText::ErrorBody => "Lamentamos las molestias. Por favor, inténtalo de nuevo.",
        UiText::Reload => "Recargar",
    }
}
