// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication endpoints of the interview API.

use crate::error::ClientError;
use crate::models::{Credentials, Envelope, LoginData, UserProfile};
use crate::services::request::Dispatcher;
use serde_json::Value;
use std::sync::Arc;

/// API paths as constants.
pub mod paths {
    pub const REGISTER: &str = "/h5/user/register";
    pub const LOGIN: &str = "/h5/user/login";
    pub const CURRENT_USER: &str = "/h5/user/currentUser";
    pub const LOGOUT: &str = "/h5/user/logout";
}

/// Thin wrappers over the auth endpoints. No retries; error handling is
/// whatever the dispatcher provides.
#[derive(Clone)]
pub struct AuthApi {
    dispatcher: Arc<Dispatcher>,
}

impl AuthApi {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Register a new account. Returns the server envelope as-is.
    pub async fn register(&self, credentials: &Credentials) -> Result<Value, ClientError> {
        self.dispatcher.post(paths::REGISTER, credentials).await
    }

    /// Log in. The token is in `data.token`; storing it is up to the caller.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<Envelope<LoginData>, ClientError> {
        self.dispatcher.post(paths::LOGIN, credentials).await
    }

    /// Fetch the profile of the user owning the current token.
    pub async fn get_user_profile(&self) -> Result<Envelope<UserProfile>, ClientError> {
        self.dispatcher.get(paths::CURRENT_USER).await
    }

    /// Signal server-side session teardown.
    ///
    /// Does not touch local state; see `Session::logout`.
    pub async fn logout(&self) -> Result<Value, ClientError> {
        self.dispatcher.get(paths::LOGOUT).await
    }
}
