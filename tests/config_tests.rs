use std::env;
use vestibule::config;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://example.com/site/"),
        "https://example.com/site"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://example.com/site///"),
        "https://example.com/site"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://example.com/site/  "),
        "https://example.com/site"
    );
}

#[test]
fn test_sanitize_base_url_empty_string_falls_back_to_local_default() {
    assert_eq!(config::sanitize_base_url(""), "http://127.0.0.1:8080");
}

#[test]
fn test_get_site_name_uses_default() {
    env::remove_var("SITE_NAME");

    assert_eq!(config::get_site_name(), config::DEFAULT_SITE_NAME);
}

#[test]
fn test_get_locale_overrides_and_defaults() {
    env::set_var("SITE_LOCALE", "pt_BR");
    assert_eq!(config::get_locale(), "pt_BR");

    // Whitespace-only values fall back to the default
    env::set_var("SITE_LOCALE", "   ");
    assert_eq!(config::get_locale(), config::DEFAULT_LOCALE);

    env::remove_var("SITE_LOCALE");
    assert_eq!(config::get_locale(), config::DEFAULT_LOCALE);
}

#[test]
fn test_get_recovery_mode_parses_flag_values() {
    env::set_var("RECOVERY_MODE", "1");
    assert!(config::get_recovery_mode());

    env::set_var("RECOVERY_MODE", "off");
    assert!(!config::get_recovery_mode());

    env::remove_var("RECOVERY_MODE");
    assert!(!config::get_recovery_mode());
}

#[test]
fn test_get_admin_email_uses_default() {
    env::remove_var("ADMIN_EMAIL");

    assert_eq!(config::get_admin_email(), config::DEFAULT_ADMIN_EMAIL);
}
