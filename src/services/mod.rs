// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API wrappers and session-scoped state.

pub mod auth;
pub mod avatar;
pub mod history;
pub mod request;
pub mod session;
pub mod theme;

pub use auth::AuthApi;
pub use avatar::AvatarResolver;
pub use history::{HistoryLog, HISTORY_MAX_SIZE};
pub use request::Dispatcher;
pub use session::{GuestReason, Identity, Session, GUEST_ID};
pub use theme::{Theme, ThemeStore};
