// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user article viewing history.
//!
//! History is a JSON array stored under `interview_history:<user_id>`,
//! newest first, unique by article ID and capped at [`HISTORY_MAX_SIZE`].
//! Every operation is fail-open: failures are logged and reported through
//! [`Outcome`], never returned as errors.

use crate::error::ClientError;
use crate::models::{Article, HistoryItem};
use crate::outcome::Outcome;
use crate::services::session::Session;
use crate::store::{keys, KeyValueStore};
use crate::time_utils::format_utc_rfc3339_millis;
use chrono::Utc;
use std::sync::Arc;

/// Maximum number of history entries kept per user.
pub const HISTORY_MAX_SIZE: usize = 30;

/// Move `article` to the front of `history`, stamped with `viewed_at`.
///
/// Any previous entry with the same ID is dropped and the result is
/// truncated to `cap` entries.
pub fn record_view(
    mut history: Vec<HistoryItem>,
    article: Article,
    viewed_at: String,
    cap: usize,
) -> Vec<HistoryItem> {
    history.retain(|item| item.article.id != article.id);
    history.insert(0, HistoryItem { article, viewed_at });
    history.truncate(cap);
    history
}

/// Viewing history namespaced by the session's current user.
#[derive(Clone)]
pub struct HistoryLog {
    store: Arc<dyn KeyValueStore>,
    session: Arc<Session>,
}

impl HistoryLog {
    pub fn new(store: Arc<dyn KeyValueStore>, session: Arc<Session>) -> Self {
        Self { store, session }
    }

    /// Storage key for the current user's history.
    pub async fn key(&self) -> String {
        let user_id = self.session.current_user_id().await;
        keys::user_scoped(keys::HISTORY_PREFIX, &user_id)
    }

    /// Record a view of `article`.
    ///
    /// On a failed write the previously persisted history is left as it was.
    pub async fn add(&self, article: Article) -> Outcome<()> {
        let key = self.key().await;
        let history = self.read(&key).into_value();

        let article_id = article.id.clone();
        let updated = record_view(
            history,
            article,
            format_utc_rfc3339_millis(Utc::now()),
            HISTORY_MAX_SIZE,
        );

        match self.write(&key, &updated) {
            Ok(()) => Outcome::Complete(()),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %key,
                    article_id = %article_id,
                    "Failed to save history"
                );
                Outcome::degraded((), e.to_string())
            }
        }
    }

    /// All history entries, newest first. Empty on any failure.
    pub async fn get_all(&self) -> Vec<HistoryItem> {
        self.load().await.into_value()
    }

    /// Like [`HistoryLog::get_all`], but reports whether the empty list
    /// was substituted for a failure.
    pub async fn load(&self) -> Outcome<Vec<HistoryItem>> {
        let key = self.key().await;
        self.read(&key)
    }

    /// Delete the current user's history.
    pub async fn clear(&self) -> Outcome<()> {
        let key = self.key().await;
        match self.store.remove(&key) {
            Ok(()) => Outcome::Complete(()),
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to clear history");
                Outcome::degraded((), e.to_string())
            }
        }
    }

    /// Remove the entry for article `id`, if any.
    pub async fn remove_by_id(&self, id: &str) -> Outcome<()> {
        let key = self.key().await;
        let mut history = self.read(&key).into_value();
        history.retain(|item| item.article.id != id);

        match self.write(&key, &history) {
            Ok(()) => Outcome::Complete(()),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %key,
                    article_id = id,
                    "Failed to remove history entry"
                );
                Outcome::degraded((), e.to_string())
            }
        }
    }

    fn read(&self, key: &str) -> Outcome<Vec<HistoryItem>> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Outcome::Complete(Vec::new()),
            Err(e) => {
                tracing::warn!(error = %e, key, "Failed to read history");
                return Outcome::degraded(Vec::new(), e.to_string());
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, key, "Stored history is corrupt, ignoring");
                return Outcome::degraded(Vec::new(), format!("Corrupt history: {}", e));
            }
        };

        // A malformed entry only costs that entry, not the whole list.
        let total = entries.len();
        let history: Vec<HistoryItem> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(error = %e, key, "Skipping malformed history entry");
                    None
                }
            })
            .collect();

        match total - history.len() {
            0 => Outcome::Complete(history),
            skipped => Outcome::degraded(
                history,
                format!("Skipped {} malformed history entries", skipped),
            ),
        }
    }

    fn write(&self, key: &str, history: &[HistoryItem]) -> Result<(), ClientError> {
        let raw = serde_json::to_string(history)?;
        self.store.set(key, &raw)
    }
}
