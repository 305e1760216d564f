// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for folio-nav.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name | Path prefix |
//! |------|----------|-------------|-------------|
//! | en   | English  | English     | none        |
//! | es   | Spanish  | Español     | `/es`       |
//!
//! Interface strings are looked up by the exhaustive [`UiText`] enum.
//! Catalog content carries its own per-language text (see
//! [`crate::catalog::LocalizedText`]). The current selection lives in a
//! [`LanguageState`] owned by the session.

mod catalog;
mod state;

pub use catalog::{t, Lang, UiText};
pub use state::{LanguageState, SubscriptionId};
