use crate::config;
use crate::hooks::Hooks;

/// Shared application state: the site configuration snapshot and the base
/// hook registry plugins register into at startup. Cloned by axum per
/// request; the per-request hook registry comes from [`AppState::hooks`].
#[derive(Clone)]
pub struct AppState {
    pub site_name: String,
    pub locale: String,
    pub public_base_url: String,
    pub recovery_mode: bool,
    pub admin_email: String,
    pub hooks: Hooks,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn from_env() -> Self {
        AppState {
            site_name: config::get_site_name(),
            locale: config::get_locale(),
            public_base_url: config::get_public_base_url(),
            recovery_mode: config::get_recovery_mode(),
            admin_email: config::get_admin_email(),
            hooks: Hooks::new(),
            custom_css: None,
        }
    }

    /// A request-scoped copy of the base registry. Anything the renderer
    /// registers on it lives only for that request.
    pub fn hooks(&self) -> Hooks {
        self.hooks.clone()
    }
}
