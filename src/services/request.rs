// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request dispatcher for the interview API.
//!
//! Every API call goes through one `Dispatcher`, which:
//! - Attaches the stored bearer token to outgoing requests
//! - Unwraps successful bodies so callers get the decoded payload directly
//! - Handles 401 centrally: clears the token, navigates to login, notifies
//! - Surfaces other server errors as a user notification

use crate::config::ClientConfig;
use crate::error::{ClientError, LOGIN_EXPIRED_MESSAGE};
use crate::store::TokenStore;
use crate::ui::{Navigator, Notifier};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error body the server sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared HTTP client with request/response interceptors.
pub struct Dispatcher {
    http: reqwest::Client,
    base_url: String,
    login_route: String,
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    /// Build a dispatcher with the configured base URL and timeout.
    pub fn new(
        config: &ClientConfig,
        tokens: TokenStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                ClientError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            login_route: config.login_route.clone(),
            tokens,
            navigator,
            notifier,
        })
    }

    /// Resolve an API path against the base URL with exactly one slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `path` and decode the body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(path, "GET");
        self.dispatch(self.http.get(self.url(path))).await
    }

    /// POST `body` as JSON to `path` and decode the response body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        self.dispatch(self.http.post(self.url(path)).json(body)).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let request = self.intercept_request(request);
        let outcome = request.send().await;
        self.intercept_response(outcome).await
    }

    // ─── Interceptors ────────────────────────────────────────────────────────

    /// Outgoing: attach `Authorization: Bearer <token>` when a token exists.
    fn intercept_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.current() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Incoming: unwrap success bodies, route failures to the right handler.
    async fn intercept_response<T: DeserializeOwned>(
        &self,
        outcome: Result<Response, reqwest::Error>,
    ) -> Result<T, ClientError> {
        let response = match outcome {
            Ok(response) => response,
            // Never reached the wire; propagate unchanged.
            Err(e) if e.is_builder() => return Err(ClientError::Request(e.to_string())),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    timeout = e.is_timeout(),
                    "Request failed without response"
                );
                return Err(ClientError::Transport(e.to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            return decode_body(response).await;
        }

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ClientError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

        tracing::warn!(status = status.as_u16(), message = %message, "API error response");
        self.notifier.notify_failure(&message);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Token removal, then navigation, then notification.
    fn handle_unauthorized(&self) {
        tracing::info!(route = %self.login_route, "Session rejected by server, returning to login");

        if let Err(e) = self.tokens.remove_token() {
            tracing::warn!(error = %e, "Failed to remove rejected token");
        }
        self.navigator.navigate(&self.login_route);
        self.notifier.notify_failure(LOGIN_EXPIRED_MESSAGE);
    }
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    // Empty 2xx bodies decode as JSON null.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| ClientError::Decode(format!("Empty response body: {}", e)));
    }

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Server-provided `message` from an error body, if any.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
