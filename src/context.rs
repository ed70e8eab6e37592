//! Request-scoped state the renderer reads but does not own.

/// Whether the login page renders inside the interim (modal) flow, and
/// whether that flow already succeeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterimLogin {
    #[default]
    None,
    Active,
    Success,
}

impl InterimLogin {
    pub fn is_active(&self) -> bool {
        !matches!(self, InterimLogin::None)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InterimLogin::Success)
    }
}

/// Per-request context for one render of the login screen.
///
/// The legacy error string is a deprecated fallback error source kept for
/// older integrations; the renderer consumes it exactly once via
/// [`RenderContext::take_legacy_error`] and folds it into the error
/// collection under the code `error`.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// The action that brought the visitor to the login page
    /// (`login`, `confirm_admin_email`, ...).
    pub action: String,
    pub interim_login: InterimLogin,
    legacy_error: Option<String>,
}

impl RenderContext {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            interim_login: InterimLogin::None,
            legacy_error: None,
        }
    }

    pub fn set_legacy_error(&mut self, error: &str) {
        self.legacy_error = Some(error.to_string());
    }

    /// One-shot consumption: returns the legacy error and clears it.
    pub fn take_legacy_error(&mut self) -> Option<String> {
        self.legacy_error.take()
    }
}
