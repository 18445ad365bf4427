use super::*;

// =============================================================
// AuthorPolicy
// =============================================================

#[test]
fn author_policy_defaults_to_session() {
    assert_eq!(AuthorPolicy::default(), AuthorPolicy::Session);
}

#[test]
fn author_policy_parse_accepts_known_names() {
    assert_eq!(AuthorPolicy::parse("session"), Some(AuthorPolicy::Session));
    assert_eq!(AuthorPolicy::parse(" Name-Lookup "), Some(AuthorPolicy::NameLookup));
    assert_eq!(AuthorPolicy::parse("name_lookup"), Some(AuthorPolicy::NameLookup));
    assert_eq!(AuthorPolicy::parse("anonymous"), None);
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn from_values_uses_defaults_when_unset() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_values_trims_trailing_slash() {
    let config = ClientConfig::from_values(Some("http://127.0.0.1:8090/"), None);
    assert_eq!(config.api_base, "http://127.0.0.1:8090");
}

#[test]
fn from_values_ignores_blank_base() {
    let config = ClientConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_values_falls_back_on_unknown_policy() {
    let config = ClientConfig::from_values(None, Some("whatever"));
    assert_eq!(config.author_policy, AuthorPolicy::Session);

    let config = ClientConfig::from_values(None, Some("name-lookup"));
    assert_eq!(config.author_policy, AuthorPolicy::NameLookup);
}

#[test]
fn with_accent_overrides_default_color() {
    let config = ClientConfig::from_values(None, None).with_accent(Some(" #FF8800 "));
    assert_eq!(config.accent, "#ff8800");
}

#[test]
fn with_accent_keeps_default_for_invalid_or_blank() {
    for raw in [None, Some(""), Some("orange"), Some("#12345"), Some("#ggg")] {
        assert_eq!(ClientConfig::from_values(None, None).with_accent(raw).accent, DEFAULT_ACCENT);
    }
}
