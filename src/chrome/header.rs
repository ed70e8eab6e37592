use crate::config;
use crate::context::RenderContext;
use crate::hooks::{FilterArgs, Hooks, DEFAULT_PRIORITY};
use crate::login_errors::{LoginErrors, Severity};
use crate::models::AppState;
use crate::utils::{esc_attr, esc_url, is_rtl, language_attributes, locale_css_class};

use super::footer::shake_js;
use super::notice::{admin_notice, NoticeArgs};
use super::viewport::viewport_meta;

/// Error codes that shake the login form. Adjustable per request through
/// the `shake_error_codes` filter.
pub const SHAKE_ERROR_CODES: &[&str] = &[
    "empty_password",
    "empty_email",
    "invalid_email",
    "invalidcombo",
    "empty_username",
    "invalid_username",
    "incorrect_password",
    "retrieve_password_email_failure",
];

/// Inputs to one header render. All parts are optional; missing inputs
/// degrade to defaults rather than failing.
#[derive(Default)]
pub struct HeaderArgs<'a> {
    /// Page title for the `<title>` element. Defaults to "Log In".
    pub title: Option<&'a str>,
    /// Message to display above the form. Default empty.
    pub message: &'a str,
    /// Accumulated errors to display. Defaults to an empty collection.
    pub errors: Option<LoginErrors>,
}

fn sensitive_page_robots(mut directives: Vec<String>, _args: &FilterArgs) -> Vec<String> {
    directives.push("noindex".to_string());
    directives.push("noarchive".to_string());
    directives
}

fn robots_meta(hooks: &Hooks, out: &mut String) {
    let directives = hooks.apply_list_filters("robots", Vec::new(), &FilterArgs::none());
    if !directives.is_empty() {
        out.push_str(&format!(
            "<meta name=\"robots\" content=\"{}\" />\n",
            esc_attr(&directives.join(", "))
        ));
    }
}

fn strict_referrer_meta(out: &mut String) {
    out.push_str("<meta name=\"referrer\" content=\"strict-origin-when-cross-origin\" />\n");
}

/// Outputs the login page header: document start through the open
/// `<div id="login">`, including any message and error panels. The
/// caller renders the form body afterwards and closes the document with
/// [`super::login_footer`].
pub fn login_header(
    state: &AppState,
    ctx: &mut RenderContext,
    hooks: &mut Hooks,
    args: HeaderArgs,
    out: &mut String,
) {
    let title = args.title.unwrap_or("Log In");

    // Don't index any of these forms.
    hooks.add_list_filter("robots", DEFAULT_PRIORITY, sensitive_page_robots);
    hooks.add_action("login_head", 1, robots_meta);
    hooks.add_action("login_head", DEFAULT_PRIORITY, |_, out| strict_referrer_meta(out));

    hooks.add_action("login_head", DEFAULT_PRIORITY, |_, out| viewport_meta(out));

    let mut errors = args.errors.unwrap_or_default();

    // Shake it!
    let shake_codes: Vec<String> = SHAKE_ERROR_CODES.iter().map(|c| c.to_string()).collect();
    let shake_codes = hooks.apply_list_filters("shake_error_codes", shake_codes, &FilterArgs::none());

    if !shake_codes.is_empty()
        && errors.has_errors()
        && errors.codes().any(|code| shake_codes.iter().any(|c| c == code))
    {
        hooks.add_action("login_footer", 12, |_, out| shake_js(out));
    }

    let mut login_title = format!("{} &lsaquo; {} &#8212; Vestibule", title, state.site_name);

    if state.recovery_mode {
        login_title = format!("Recovery Mode &#8212; {}", login_title);
    }

    let login_title = hooks.apply_filters("login_title", login_title, &FilterArgs::with_original(title));

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html {}>\n", language_attributes(&state.locale)));
    out.push_str("<head>\n");
    out.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />\n");
    out.push_str(&format!("<title>{}</title>\n", login_title));
    out.push_str(
        "<link rel=\"stylesheet\" id=\"login-css\" href=\"/static/login.css\" type=\"text/css\" media=\"all\" />\n",
    );

    // Remove stored autosave drafts on logging out. Deliberately not a
    // login_head listener so plugins cannot unhook it.
    if errors.first_code() == Some("loggedout") {
        out.push_str(
            "<script>if(\"sessionStorage\" in window){try{for(var key in sessionStorage){if(key.indexOf(\"vestibule-autosave-\")!=-1){sessionStorage.removeItem(key)}}}catch(e){}};</script>\n",
        );
    }

    hooks.do_action("login_enqueue_scripts", out);

    hooks.do_action("login_head", out);

    let login_header_url = hooks.apply_filters(
        "login_headerurl",
        config::LOGIN_HEADER_URL.to_string(),
        &FilterArgs::none(),
    );

    // The deprecated title-attribute hook is still evaluated first; a
    // non-empty result wins over the login_headertext default.
    if hooks.has_text_filter("login_headertitle") {
        tracing::warn!("the login_headertitle hook is deprecated; use login_headertext instead");
    }
    let login_header_title = hooks.apply_filters("login_headertitle", String::new(), &FilterArgs::none());

    let login_header_text = if login_header_title.is_empty() {
        "Powered by Vestibule".to_string()
    } else {
        login_header_title
    };
    let login_header_text = hooks.apply_filters("login_headertext", login_header_text, &FilterArgs::none());

    let mut classes = vec![format!("login-action-{}", ctx.action), "vestibule-ui".to_string()];

    if is_rtl(&state.locale) {
        classes.push("rtl".to_string());
    }

    if ctx.interim_login.is_active() {
        classes.push("interim-login".to_string());

        out.push_str("<style type=\"text/css\">html{background-color: transparent;}</style>\n");

        if ctx.interim_login.is_success() {
            classes.push("interim-login-success".to_string());
        }
    }

    classes.push(locale_css_class(&state.locale));

    let classes = hooks.apply_list_filters("login_body_class", classes, &FilterArgs::with_action(&ctx.action));

    out.push_str("</head>\n");
    out.push_str(&format!(
        "<body class=\"login no-js {}\">\n",
        esc_attr(&classes.join(" "))
    ));
    out.push_str("<script>document.body.className = document.body.className.replace('no-js','js');</script>\n");

    hooks.do_action("login_header", out);

    if ctx.action != "confirm_admin_email" && !title.is_empty() {
        out.push_str(&format!("<h1 class=\"screen-reader-text\">{}</h1>\n", title));
    }

    out.push_str("<div id=\"login\">\n");
    out.push_str(&format!(
        "<h1 role=\"presentation\" class=\"login-logo\"><a href=\"{}\">{}</a></h1>\n",
        esc_url(&login_header_url),
        login_header_text
    ));

    let message = hooks.apply_filters("login_message", args.message.to_string(), &FilterArgs::none());

    if !message.is_empty() {
        out.push_str(&message);
        out.push('\n');
    }

    // In case an older integration set the legacy error string rather
    // than passing a collection.
    if let Some(legacy) = ctx.take_legacy_error() {
        if !legacy.is_empty() {
            errors.add("error", &legacy);
        }
    }

    if errors.has_errors() {
        let mut error_list: Vec<&str> = Vec::new();
        let mut messages = String::new();

        for (_code, severity, msgs) in errors.iter() {
            for msg in msgs {
                match severity {
                    Severity::Message => messages.push_str(&format!("<p>{}</p>", msg)),
                    Severity::Error => error_list.push(msg.as_str()),
                }
            }
        }

        if !error_list.is_empty() {
            let mut errors_html = String::new();

            if error_list.len() > 1 {
                errors_html.push_str("<ul class=\"login-error-list\">");

                for item in &error_list {
                    errors_html.push_str(&format!("<li>{}</li>", item));
                }

                errors_html.push_str("</ul>");
            } else {
                errors_html.push_str(&format!("<p>{}</p>", error_list[0]));
            }

            let errors_html = hooks.apply_filters("login_errors", errors_html, &FilterArgs::none());

            admin_notice(
                &errors_html,
                &NoticeArgs {
                    kind: "error",
                    id: Some("login_error"),
                    additional_classes: &[],
                    paragraph_wrap: false,
                },
                out,
            );
        }

        if !messages.is_empty() {
            let messages = hooks.apply_filters("login_messages", messages, &FilterArgs::none());

            admin_notice(
                &messages,
                &NoticeArgs {
                    kind: "info",
                    id: Some("login-message"),
                    additional_classes: &["message"],
                    paragraph_wrap: false,
                },
                out,
            );
        }
    }
}
