// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-detail-page session state.
//!
//! ```text
//! Loading(params) ──settle──▶ Resolved | Redirect
//!      ▲                          │
//!      └──── id or language change ┘
//! ```
//!
//! Both settled states are transient: any change of parameters puts the
//! session back into `Loading`, and the next `settle` resolves afresh.

use super::{NavTargets, Navigator, Outcome};
use crate::error::NavError;
use crate::i18n::Lang;
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Loading,
    Resolved(NavTargets),
    Redirect { reason: NavError, to: String },
}

#[derive(Debug, Clone)]
pub struct DetailSession {
    param: String,
    lang: Lang,
    state: SessionState,
}

impl DetailSession {
    pub fn new(param: impl Into<String>, lang: Lang) -> Self {
        Self {
            param: param.into(),
            lang,
            state: SessionState::Loading,
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Resolve the current parameters if they have not been resolved yet.
    pub fn settle(&mut self, navigator: &Navigator<'_>) -> &SessionState {
        if self.state == SessionState::Loading {
            self.state = match navigator.resolve(&self.param, self.lang) {
                Outcome::Resolved(navigation) => SessionState::Resolved(navigation.targets),
                Outcome::Redirect { reason, to } => SessionState::Redirect { reason, to },
            };
            trace!(param = %self.param, lang = %self.lang, state = ?self.state, "session settled");
        }
        &self.state
    }

    /// Route parameter changed. Returns whether the session must reload.
    pub fn set_param(&mut self, param: &str) -> bool {
        if param == self.param {
            return false;
        }
        self.param = param.to_string();
        self.state = SessionState::Loading;
        true
    }

    /// Active language changed. Returns whether the session must reload.
    pub fn set_language(&mut self, lang: Lang) -> bool {
        if lang == self.lang {
            return false;
        }
        self.lang = lang;
        self.state = SessionState::Loading;
        true
    }
}
