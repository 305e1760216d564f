// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session language selection with explicit subscriptions.
//!
//! The state is owned by whoever drives the session and passed by
//! reference; there is no ambient global. Everything runs on one thread,
//! so subscribers are plain `FnMut` boxes and need no locking. A change is
//! stored before any subscriber runs, so every callback observes the new
//! language through both its argument and [`LanguageState::get`].

use super::Lang;
use crate::error::NavError;
use tracing::{debug, info};

/// Handle returned by [`LanguageState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Lang)>;

pub struct LanguageState {
    current: Lang,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl LanguageState {
    pub fn new() -> Self {
        Self::with_language(Lang::DEFAULT)
    }

    pub fn with_language(lang: Lang) -> Self {
        Self {
            current: lang,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Seed from the language a route prefix supplied, if any. A route
    /// language wins over the default.
    pub fn from_route(route_lang: Option<Lang>) -> Self {
        Self::with_language(route_lang.unwrap_or_default())
    }

    pub fn get(&self) -> Lang {
        self.current
    }

    /// Select a language by code.
    ///
    /// Unsupported codes fail with [`NavError::UnsupportedLanguage`] and
    /// leave the state untouched.
    pub fn set(&mut self, code: &str) -> Result<Lang, NavError> {
        let lang: Lang = code.parse()?;
        self.select(lang);
        Ok(lang)
    }

    /// Select a language. Returns whether the selection changed; selecting
    /// the current language notifies nobody.
    pub fn select(&mut self, lang: Lang) -> bool {
        if lang == self.current {
            debug!(lang = %lang, "language unchanged");
            return false;
        }
        info!(from = %self.current, to = %lang, "language changed");
        self.current = lang;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(lang);
        }
        true
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Lang) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
