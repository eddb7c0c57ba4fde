// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interview-Client: data and session layer for the interview-prep front-end
//!
//! This crate provides the authenticated API client, the session (current
//! user) resolver, and the per-user persisted state built on top of it.

pub mod config;
pub mod error;
pub mod models;
pub mod outcome;
pub mod services;
pub mod store;
pub mod time_utils;
pub mod ui;

use config::ClientConfig;
use error::ClientError;
use services::{AuthApi, AvatarResolver, Dispatcher, HistoryLog, Session, ThemeStore};
use std::sync::Arc;
use store::{KeyValueStore, TokenStore};
use ui::{Navigator, Notifier};

/// Fully wired client: every component shares one store and one dispatcher.
#[derive(Clone)]
pub struct InterviewClient {
    pub config: ClientConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub tokens: TokenStore,
    pub dispatcher: Arc<Dispatcher>,
    pub auth: AuthApi,
    pub session: Arc<Session>,
    pub history: HistoryLog,
    pub theme: ThemeStore,
    pub avatars: AvatarResolver,
}

impl InterviewClient {
    /// Build every component from `config` on top of `store`.
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let tokens = TokenStore::new(store.clone());
        let dispatcher = Arc::new(Dispatcher::new(
            &config,
            tokens.clone(),
            navigator,
            notifier,
        )?);
        let auth = AuthApi::new(dispatcher.clone());
        let session = Arc::new(Session::new(auth.clone(), tokens.clone()));
        let history = HistoryLog::new(store.clone(), session.clone());
        let theme = ThemeStore::new(store.clone(), session.clone());
        let avatars = AvatarResolver::new(&config.asset_base_url);

        Ok(Self {
            config,
            store,
            tokens,
            dispatcher,
            auth,
            session,
            history,
            theme,
            avatars,
        })
    }
}
