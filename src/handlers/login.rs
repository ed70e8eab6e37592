use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{Redirect, Response};
use serde::Deserialize;

use crate::chrome::HeaderArgs;
use crate::context::{InterimLogin, RenderContext};
use crate::error::AppError;
use crate::login_errors::{LoginErrors, Severity};
use crate::models::AppState;
use crate::templates::{ConfirmAdminEmailTemplate, LoginFormTemplate};
use crate::utils::parse_flag;

use super::helpers::{login_url, render_login_page};

#[derive(Deserialize)]
pub struct LoginQuery {
    pub action: Option<String>,
    #[serde(rename = "interim-login")]
    pub interim_login: Option<String>,
    pub loggedout: Option<String>,
    pub redirect_to: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub log: Option<String>,
    #[serde(rename = "interim-login")]
    pub interim_login: Option<String>,
    pub redirect_to: Option<String>,
}

pub async fn root_get() -> Redirect {
    Redirect::to("/login")
}

pub async fn login_get(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Result<Response, AppError> {
    let action = query.action.as_deref().unwrap_or("login");
    let mut ctx = RenderContext::new(action);
    if parse_flag(query.interim_login.as_ref(), false) {
        ctx.interim_login = InterimLogin::Active;
    }

    if action == "confirm_admin_email" {
        let form = ConfirmAdminEmailTemplate {
            admin_email: &state.admin_email,
            login_url: "/login",
        }
        .render()?;
        let args = HeaderArgs {
            title: Some("Administration email verification"),
            message: "",
            errors: None,
        };
        return Ok(render_login_page(&state, &mut ctx, args, &form));
    }

    let mut errors = LoginErrors::new();
    if parse_flag(query.loggedout.as_ref(), false) {
        errors.add_with_severity("loggedout", "You are now logged out.", Severity::Message);
    }

    let redirect_to = query.redirect_to.as_deref().unwrap_or("/");
    let form = LoginFormTemplate {
        user_login: "",
        redirect_to,
        interim: ctx.interim_login.is_active(),
        lost_password_url: &login_url(Some("lostpassword"), None),
    }
    .render()?;
    let args = HeaderArgs {
        title: None,
        message: "",
        errors: Some(errors),
    };
    Ok(render_login_page(&state, &mut ctx, args, &form))
}

pub async fn login_post(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    // Credential validation belongs to the host platform; this server
    // renders the rejection path so the chrome can be exercised.
    let user_login = form.log.unwrap_or_default();
    tracing::info!(user = %user_login, "login submission rejected (no credential backend)");

    let mut ctx = RenderContext::new("login");
    if parse_flag(form.interim_login.as_ref(), false) {
        ctx.interim_login = InterimLogin::Active;
    }

    let mut errors = LoginErrors::new();
    errors.add("invalidcombo", "Unknown username/password combination.");

    let redirect_to = form.redirect_to.as_deref().unwrap_or("/");
    let form_html = LoginFormTemplate {
        user_login: &user_login,
        redirect_to,
        interim: ctx.interim_login.is_active(),
        lost_password_url: &login_url(Some("lostpassword"), None),
    }
    .render()?;
    let args = HeaderArgs {
        title: None,
        message: "",
        errors: Some(errors),
    };
    Ok(render_login_page(&state, &mut ctx, args, &form_html))
}
