//! User and authentication models for the interview API.

use serde::{Deserialize, Serialize};

/// Username/password pair sent to register and login.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Payload of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Bearer token for subsequent requests
    pub token: String,
    pub current_authority: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Profile of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user ID (used to namespace persisted state)
    pub id: String,
    pub username: String,
    /// Display name (may be null)
    pub name: Option<String>,
    /// Avatar URL
    pub avatar: String,
    /// ISO 8601 creation time
    pub created_at: String,
    /// ISO 8601 last update time
    pub updated_at: String,
}
