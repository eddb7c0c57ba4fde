// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: who the current user is.
//!
//! Resolves a stable user ID from the stored token and a memoized profile.
//! The ID namespaces every other piece of persisted per-user state.

use crate::error::ClientError;
use crate::models::{Credentials, LoginData, UserProfile};
use crate::services::auth::AuthApi;
use crate::store::TokenStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tokio::sync::Mutex;

/// User ID used when no authenticated user can be resolved.
pub const GUEST_ID: &str = "guest";

/// Why a resolution ended up as guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestReason {
    /// No token is stored: the user is intentionally anonymous.
    NoToken,
    /// A token exists but the profile could not be fetched.
    ProfileUnavailable(String),
}

/// Result of resolving the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(String),
    Guest(GuestReason),
}

impl Identity {
    /// Storage namespace for this identity.
    pub fn id(&self) -> &str {
        match self {
            Identity::User(id) => id,
            Identity::Guest(_) => GUEST_ID,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Identity::Guest(_))
    }
}

/// Explicit session object owning the in-memory profile cache.
///
/// Concurrent resolutions are coalesced: the first caller fetches the profile
/// while the others wait on `resolve_lock` and then read the cache.
pub struct Session {
    auth: AuthApi,
    tokens: TokenStore,
    /// Cached profile, valid for this session's lifetime
    profile: RwLock<Option<UserProfile>>,
    /// Bumped on every invalidation so a fetch that started before it
    /// cannot repopulate the cache afterwards.
    generation: AtomicU64,
    resolve_lock: Mutex<()>,
}

impl Session {
    pub fn new(auth: AuthApi, tokens: TokenStore) -> Self {
        Self {
            auth,
            tokens,
            profile: RwLock::new(None),
            generation: AtomicU64::new(0),
            resolve_lock: Mutex::new(()),
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────────

    /// Prime the profile cache. Equivalent to a first resolution.
    pub async fn init(&self) -> Identity {
        let identity = self.resolve_identity().await;
        tracing::info!(
            user_id = identity.id(),
            guest = identity.is_guest(),
            "Session initialized"
        );
        identity
    }

    /// Drop the cached profile so the next resolution fetches again.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.profile.write() {
            Ok(mut profile) => *profile = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    /// Alias of [`Session::invalidate`] kept for call sites on logout.
    pub fn clear_profile_cache(&self) {
        self.invalidate();
    }

    pub fn cached_profile(&self) -> Option<UserProfile> {
        self.profile.read().ok().and_then(|p| p.clone())
    }

    // ─── Resolution ──────────────────────────────────────────────────────────

    /// ID of the current user, or `"guest"`. Never fails.
    pub async fn current_user_id(&self) -> String {
        self.resolve_identity().await.id().to_string()
    }

    /// Resolve the current user.
    ///
    /// 1. Cached profile: return its ID, no I/O
    /// 2. No token: guest, no network call
    /// 3. Otherwise fetch the profile once (single-flight) and cache it;
    ///    on failure return guest without caching
    pub async fn resolve_identity(&self) -> Identity {
        if let Some(id) = self.cached_id() {
            return Identity::User(id);
        }

        if self.tokens.current().is_none() {
            return Identity::Guest(GuestReason::NoToken);
        }

        let _guard = self.resolve_lock.lock().await;

        // Another task may have resolved while we were waiting.
        if let Some(id) = self.cached_id() {
            return Identity::User(id);
        }
        // Or the token may have been cleared by a 401 in the meantime.
        if self.tokens.current().is_none() {
            return Identity::Guest(GuestReason::NoToken);
        }

        let generation = self.generation.load(Ordering::SeqCst);
        match self.auth.get_user_profile().await {
            Ok(envelope) => {
                let profile = envelope.into_data();
                let id = profile.id.clone();
                self.store_profile(profile, generation);
                tracing::debug!(user_id = %id, "Resolved current user");
                Identity::User(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch user profile, using guest");
                Identity::Guest(GuestReason::ProfileUnavailable(e.to_string()))
            }
        }
    }

    fn cached_id(&self) -> Option<String> {
        self.profile
            .read()
            .ok()
            .and_then(|p| p.as_ref().map(|p| p.id.clone()))
    }

    fn store_profile(&self, profile: UserProfile, generation: u64) {
        let Ok(mut slot) = self.profile.write() else {
            return;
        };
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Session invalidated during profile fetch, not caching");
            return;
        }
        *slot = Some(profile);
    }

    // ─── Login / Logout ──────────────────────────────────────────────────────

    /// Log in, store the returned token and forget any previous identity.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginData, ClientError> {
        let envelope = self.auth.login(credentials).await?;
        let data = envelope.into_data();

        self.tokens.set_token(&data.token)?;
        self.invalidate();

        tracing::info!(username = %credentials.username, "Logged in");
        Ok(data)
    }

    /// Tell the server to end the session, then clear local state.
    ///
    /// The token and profile cache are cleared even when the server call
    /// fails; the server's result is returned afterwards.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.auth.logout().await;

        if let Err(e) = self.tokens.remove_token() {
            tracing::warn!(error = %e, "Failed to remove token on logout");
        }
        self.invalidate();

        match result {
            Ok(_) => {
                tracing::info!("Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logout request failed, local session cleared");
                Err(e)
            }
        }
    }
}
