//! Client configuration baked in at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so the backend base URL,
//! the article authorization policy and the theme accent are read with
//! `option_env!` when the crate is built. The shell provides the resulting `ClientConfig` as context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::theme::{DEFAULT_ACCENT, parse_accent};

/// Backend used when `PHOTOBLOG_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://afif-project.lammem.net";

/// Rule that authorizes article creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthorPolicy {
    /// An authenticated session is required; the session user becomes the author.
    #[default]
    Session,
    /// The author is resolved by display name from the `users` collection.
    NameLookup,
}

impl AuthorPolicy {
    /// Parse a policy name. Accepts `session` and `name-lookup` (or `name_lookup`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "session" => Some(Self::Session),
            "name-lookup" | "name_lookup" => Some(Self::NameLookup),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
    pub author_policy: AuthorPolicy,
    /// Accent color for the theme, `#rgb` or `#rrggbb`.
    pub accent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            author_policy: AuthorPolicy::Session,
            accent: DEFAULT_ACCENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from the values captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PHOTOBLOG_API_URL"), option_env!("PHOTOBLOG_AUTHOR_POLICY"))
            .with_accent(option_env!("PHOTOBLOG_ACCENT"))
    }

    /// Override the theme accent. An invalid color keeps the current one.
    #[must_use]
    pub fn with_accent(mut self, accent: Option<&str>) -> Self {
        if let Some(raw) = accent.filter(|v| !v.trim().is_empty()) {
            match parse_accent(raw) {
                Some(accent) => self.accent = accent,
                None => leptos::logging::warn!("invalid accent color {raw:?}; using {}", self.accent),
            }
        }
        self
    }

    /// Build config from optional raw values, falling back to defaults.
    #[must_use]
    pub fn from_values(api_base: Option<&str>, author_policy: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();

        let author_policy = match author_policy {
            None => AuthorPolicy::default(),
            Some(raw) => AuthorPolicy::parse(raw).unwrap_or_else(|| {
                leptos::logging::warn!("unknown author policy {raw:?}; using session");
                AuthorPolicy::default()
            }),
        };

        Self { api_base, author_policy, accent: DEFAULT_ACCENT.to_owned() }
    }
}
