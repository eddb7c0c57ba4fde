// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! Everything has a sensible default so a bare `from_env()` yields a client
//! pointed at the production API.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Production API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://interview-api-t.itheima.net/";
/// Fixed per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
/// Route the application is sent to when the server rejects the token.
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_STORAGE_PATH: &str = ".interview-client/storage.json";
pub const DEFAULT_ASSET_BASE_URL: &str = "/";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin every API path is resolved against
    pub api_base_url: String,
    /// Timeout applied to each HTTP request
    pub request_timeout: Duration,
    /// Route navigated to on HTTP 401
    pub login_route: String,
    /// JSON file backing the persisted key-value store
    pub storage_path: PathBuf,
    /// Base URL for static assets (default avatar)
    pub asset_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default config pointed at a local test server.
    pub fn test_default(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout: Duration::from_secs(5),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let request_timeout = match env::var("INTERVIEW_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "INTERVIEW_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url: env::var("INTERVIEW_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout,
            login_route: env::var("INTERVIEW_LOGIN_ROUTE")
                .unwrap_or_else(|_| DEFAULT_LOGIN_ROUTE.to_string()),
            storage_path: env::var("INTERVIEW_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
            asset_base_url: env::var("INTERVIEW_ASSET_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ASSET_BASE_URL.to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
