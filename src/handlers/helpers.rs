use axum::response::{Html, IntoResponse, Response};

use crate::chrome::{login_footer, login_header, HeaderArgs};
use crate::context::RenderContext;
use crate::models::AppState;
use crate::utils::build_query_string;

/// Assemble a full login page: header chrome, form body, footer.
pub fn render_login_page(
    state: &AppState,
    ctx: &mut RenderContext,
    args: HeaderArgs,
    form_html: &str,
) -> Response {
    let mut hooks = state.hooks();
    let mut out = String::new();
    login_header(state, ctx, &mut hooks, args, &mut out);
    out.push_str(form_html);
    login_footer(state, &hooks, ctx.interim_login, &mut out);
    inject_context(state, ctx, out)
}

/// Inject a client-side context object into the page before `</body>`.
/// Login page scripts read it instead of re-parsing the query string.
pub fn inject_context(state: &AppState, ctx: &RenderContext, mut html: String) -> Response {
    let context = serde_json::json!({
        "action": ctx.action,
        "interimLogin": ctx.interim_login.is_active(),
        "locale": state.locale,
    });
    let context_str = serde_json::to_string(&context).unwrap();
    let inject = format!(
        r#"<script>window.__LOGIN_CONTEXT__ = {};</script></body>"#,
        context_str
    );
    html = html.replace("</body>", &inject);
    Html(html).into_response()
}

/// URL of the login endpoint for the given action and redirect target.
pub fn login_url(action: Option<&str>, redirect_to: Option<&str>) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    if let Some(action) = action {
        pairs.push(("action".to_string(), action.to_string()));
    }
    if let Some(redirect) = redirect_to {
        pairs.push(("redirect_to".to_string(), redirect.to_string()));
    }
    if pairs.is_empty() {
        "/login".to_string()
    } else {
        format!("/login?{}", build_query_string(&pairs))
    }
}
