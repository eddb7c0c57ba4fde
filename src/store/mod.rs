// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted key-value storage.
//!
//! Plays the role browser local storage plays for the web front-end: string
//! keys, string values, synchronous access.

pub mod file;
pub mod memory;
pub mod token;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use token::TokenStore;

use crate::error::ClientError;

/// String key-value storage shared by every component.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str) -> Result<(), ClientError>;
}

/// Storage key names as constants.
pub mod keys {
    /// Bearer token
    pub const TOKEN: &str = "interview_token";
    /// Prefix of the per-user viewing history
    pub const HISTORY_PREFIX: &str = "interview_history";
    /// Prefix of the per-user theme
    pub const THEME_PREFIX: &str = "theme";
    /// Theme used when the per-user key cannot be read
    pub const THEME_FALLBACK: &str = "theme";

    /// Namespace `prefix` by user ID: `<prefix>:<user_id>`.
    pub fn user_scoped(prefix: &str, user_id: &str) -> String {
        format!("{}:{}", prefix, user_id)
    }
}
