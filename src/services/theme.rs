// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user UI theme.

use crate::outcome::Outcome;
use crate::services::session::Session;
use crate::store::{keys, KeyValueStore};
use std::fmt;
use std::sync::Arc;

/// A theme tag such as `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme(String);

impl Theme {
    pub const DEFAULT: &'static str = "light";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Theme setting stored under `theme:<user_id>`.
#[derive(Clone)]
pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
    session: Arc<Session>,
}

impl ThemeStore {
    pub fn new(store: Arc<dyn KeyValueStore>, session: Arc<Session>) -> Self {
        Self { store, session }
    }

    /// Theme to apply at startup. Never fails.
    ///
    /// Reads the current user's theme; if that key cannot be read, falls back
    /// to the process-wide `theme` key. Missing values mean `light`.
    pub async fn init(&self) -> Theme {
        let user_id = self.session.current_user_id().await;
        let key = keys::user_scoped(keys::THEME_PREFIX, &user_id);

        let tag = match self.store.get(&key) {
            Ok(tag) => tag,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to read theme, using fallback");
                match self.store.get(keys::THEME_FALLBACK) {
                    Ok(tag) => tag,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read fallback theme, using default");
                        None
                    }
                }
            }
        };

        tag.filter(|t| !t.is_empty())
            .map(Theme::new)
            .unwrap_or_default()
    }

    /// Persist `theme` for the current user.
    pub async fn set(&self, theme: &Theme) -> Outcome<()> {
        let user_id = self.session.current_user_id().await;
        let key = keys::user_scoped(keys::THEME_PREFIX, &user_id);

        match self.store.set(&key, theme.as_str()) {
            Ok(()) => Outcome::Complete(()),
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to save theme");
                Outcome::degraded((), e.to_string())
            }
        }
    }
}
