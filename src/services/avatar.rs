// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Avatar URL normalization.

/// File name of the bundled default avatar.
const DEFAULT_AVATAR_FILE: &str = "1.png";

/// Normalizes avatar URLs and supplies the bundled default.
#[derive(Debug, Clone)]
pub struct AvatarResolver {
    default_avatar: String,
}

impl AvatarResolver {
    /// `asset_base_url` is where static assets are served from, e.g. `/`.
    pub fn new(asset_base_url: &str) -> Self {
        let base = if asset_base_url.ends_with('/') {
            asset_base_url.to_string()
        } else {
            format!("{}/", asset_base_url)
        };
        Self {
            default_avatar: format!("{}{}", base, DEFAULT_AVATAR_FILE),
        }
    }

    pub fn default_avatar(&self) -> &str {
        &self.default_avatar
    }

    /// URL to display for `url`: the default when missing, `http` upgraded
    /// to `https`, anything else unchanged.
    pub fn normalize(&self, url: Option<&str>) -> String {
        let url = match url.map(str::trim) {
            Some(u) if !u.is_empty() => u,
            _ => return self.default_avatar.clone(),
        };

        match url.strip_prefix("http://") {
            Some(rest) => format!("https://{}", rest),
            None => url.to_string(),
        }
    }

    /// Replacement source after `current` failed to load.
    ///
    /// `None` when `current` already is the default, so a broken default
    /// does not loop.
    pub fn fallback_on_error(&self, current: &str) -> Option<String> {
        (current != self.default_avatar).then(|| self.default_avatar.clone())
    }
}
