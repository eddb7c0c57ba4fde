// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token persistence.

use super::{keys, KeyValueStore};
use crate::error::ClientError;
use std::sync::Arc;

/// Reads and writes the bearer token under a single fixed key.
///
/// No validation of the token's shape and no expiry tracking: whatever the
/// login endpoint returned is stored verbatim.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn set_token(&self, token: &str) -> Result<(), ClientError> {
        self.store.set(keys::TOKEN, token)
    }

    pub fn get_token(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::TOKEN)
    }

    pub fn remove_token(&self) -> Result<(), ClientError> {
        self.store.remove(keys::TOKEN)
    }

    /// Token for an outgoing request. An unreadable store counts as no token.
    pub fn current(&self) -> Option<String> {
        match self.get_token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                None
            }
        }
    }
}
