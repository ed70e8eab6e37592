use crate::context::InterimLogin;
use crate::hooks::Hooks;
use crate::models::AppState;
use crate::utils::{esc_attr, esc_url};

/// Outputs the login page footer: closes the container opened by
/// [`super::login_header`], fires the `login_footer` action and closes
/// the document. Interim (modal) renders skip the back link.
pub fn login_footer(state: &AppState, hooks: &Hooks, interim: InterimLogin, out: &mut String) {
    out.push_str("</div>\n");

    if !interim.is_active() {
        out.push_str(&format!(
            "<p id=\"backtosite\"><a href=\"{}\">&larr; Go to {}</a></p>\n",
            esc_url(&state.public_base_url),
            esc_attr(&state.site_name)
        ));
    }

    hooks.do_action("login_footer", out);

    out.push_str("</body>\n</html>\n");
}

/// Emits the script that replays the shake animation on the login form.
/// Registered as a `login_footer` action at priority 12 when a shake
/// error code is present.
pub fn shake_js(out: &mut String) {
    out.push_str("<script>document.querySelector('form').classList.add('shake');</script>\n");
}
