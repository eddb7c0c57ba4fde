// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the interview API and local state.

pub mod article;
pub mod envelope;
pub mod user;

pub use article::{Article, HistoryItem};
pub use envelope::Envelope;
pub use user::{Credentials, LoginData, UserProfile};
