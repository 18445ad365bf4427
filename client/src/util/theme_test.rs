#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), ColorScheme::Light);
}

#[test]
fn toggle_flips_scheme() {
    assert_eq!(toggle(ColorScheme::Light), ColorScheme::Dark);
    assert_eq!(toggle(ColorScheme::Dark), ColorScheme::Light);
}

#[test]
fn color_scheme_parse_round_trips_names() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        assert_eq!(ColorScheme::parse(scheme.as_str()), Some(scheme));
    }
    assert_eq!(ColorScheme::parse("sepia"), None);
}

#[test]
fn theme_default_uses_accent_in_css_vars() {
    let theme = Theme::default();
    assert_eq!(theme.scheme, ColorScheme::Light);
    assert_eq!(theme.css_vars(), format!("--accent: {DEFAULT_ACCENT};"));
}

#[test]
fn parse_accent_accepts_short_and_long_hex() {
    assert_eq!(parse_accent("#0af").as_deref(), Some("#0af"));
    assert_eq!(parse_accent("#12AB34").as_deref(), Some("#12ab34"));
    assert_eq!(parse_accent("12ab34"), None);
    assert_eq!(parse_accent("#12ab3"), None);
}

#[test]
fn theme_with_accent_renders_it_in_css_vars() {
    let theme = Theme::with_accent("#ff8800");
    assert_eq!(theme.scheme, ColorScheme::Light);
    assert_eq!(theme.css_vars(), "--accent: #ff8800;");
}
