//! Shared UI theme: color scheme plus accent color.
//!
//! Reads the stored color scheme from `localStorage` and applies a
//! `data-color-scheme` attribute to the `<html>` element. Toggling writes the
//! choice back. Browser-only behavior; SSR and native tests no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "photoblog_color_scheme";

/// Accent used by buttons and links unless overridden.
pub const DEFAULT_ACCENT: &str = "#228be6";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme provided by the application shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self { scheme: ColorScheme::default(), accent: DEFAULT_ACCENT.to_owned() }
    }
}

impl Theme {
    /// Default scheme with the given accent.
    #[must_use]
    pub fn with_accent(accent: impl Into<String>) -> Self {
        Self { scheme: ColorScheme::default(), accent: accent.into() }
    }

    /// Inline CSS custom properties for the theme root element.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!("--accent: {};", self.accent)
    }
}

/// Accept `#rgb` or `#rrggbb` hex colors, normalised to lowercase.
#[must_use]
pub fn parse_accent(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let hex = raw.strip_prefix('#')?;
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(raw.to_ascii_lowercase())
    } else {
        None
    }
}

/// Read the stored color scheme, falling back to the system preference.
pub fn read_preference() -> ColorScheme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ColorScheme::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(scheme) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(ColorScheme::parse) {
                return scheme;
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ColorScheme::Dark } else { ColorScheme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ColorScheme::default()
    }
}

/// Apply the `data-color-scheme` attribute on the `<html>` element.
pub fn apply(scheme: ColorScheme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-color-scheme", scheme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scheme;
    }
}

/// Flip the color scheme, apply it and persist the choice.
pub fn toggle(current: ColorScheme) -> ColorScheme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
