// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio-nav — route-aware, language-aware catalog navigation.
//!
//! The navigation core of a bilingual portfolio site: project and
//! experience catalogs, the English/Spanish language selection, and the
//! navigator that turns a URL parameter into a displayable entry with
//! back/previous/next links in the active language.
//!
//! PIECES:
//! 1. **Catalog**: immutable, ordered entries keyed by stable ids.
//! 2. **I18n**: supported languages, interface strings and the session's
//!    current-language state.
//! 3. **Router**: the route table and the single language-prefix policy.
//! 4. **Navigator**: lookup, localization check and sibling navigation.

pub mod catalog;
pub mod error;
pub mod i18n;
pub mod navigator;
pub mod report;
pub mod router;
pub mod types;

pub use error::NavError;
