use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_NAME: &str = "My Site";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Where the header logo above the login form links to by default.
/// Filterable per request through the `login_headerurl` hook.
pub const LOGIN_HEADER_URL: &str = "https://vestibule.dev/";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_site_name() -> String {
    let raw = env::var("SITE_NAME").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_SITE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn get_locale() -> String {
    let raw = env::var("SITE_LOCALE").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_LOCALE.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

pub fn get_recovery_mode() -> bool {
    let raw = env::var("RECOVERY_MODE").ok();
    crate::utils::parse_flag(raw.as_ref(), false)
}

pub fn get_admin_email() -> String {
    let raw = env::var("ADMIN_EMAIL").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_ADMIN_EMAIL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}
