// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI side effects triggered by the request dispatcher.
//!
//! The dispatcher never talks to a router or toast widget directly; the
//! composing application injects these.

/// Moves the application to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Shows a transient failure message to the user.
pub trait Notifier: Send + Sync {
    fn notify_failure(&self, message: &str);
}

/// Navigator for headless use: records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "Navigation requested");
    }
}

/// Notifier for headless use: writes the message to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_failure(&self, message: &str) {
        tracing::warn!(message, "User notification");
    }
}
