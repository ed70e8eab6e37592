use once_cell::sync::Lazy;

use vestibule::chrome::{login_header, HeaderArgs};
use vestibule::context::{InterimLogin, RenderContext};
use vestibule::hooks::{Hooks, DEFAULT_PRIORITY};
use vestibule::login_errors::{LoginErrors, Severity};
use vestibule::models::AppState;

static BASE: Lazy<AppState> = Lazy::new(|| AppState {
    site_name: "Example Site".to_string(),
    locale: "en_US".to_string(),
    public_base_url: "http://localhost:8080".to_string(),
    recovery_mode: false,
    admin_email: "admin@example.com".to_string(),
    hooks: Hooks::new(),
    custom_css: None,
});

fn render(state: &AppState, ctx: &mut RenderContext, args: HeaderArgs) -> (String, Hooks) {
    let mut hooks = state.hooks();
    let mut out = String::new();
    login_header(state, ctx, &mut hooks, args, &mut out);
    (out, hooks)
}

fn render_with_errors(errors: LoginErrors) -> (String, Hooks) {
    let mut ctx = RenderContext::new("login");
    render(
        &BASE,
        &mut ctx,
        HeaderArgs {
            title: None,
            message: "",
            errors: Some(errors),
        },
    )
}

#[test]
fn test_null_title_defaults_to_log_in() {
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("<title>Log In &lsaquo; Example Site &#8212; Vestibule</title>"));
}

#[test]
fn test_custom_title_is_composed_with_site_name() {
    let mut ctx = RenderContext::new("lostpassword");
    let (out, _) = render(
        &BASE,
        &mut ctx,
        HeaderArgs {
            title: Some("Lost Password"),
            message: "",
            errors: None,
        },
    );

    assert!(out.contains("<title>Lost Password &lsaquo; Example Site &#8212; Vestibule</title>"));
}

#[test]
fn test_recovery_mode_decorates_the_title() {
    let mut state = BASE.clone();
    state.recovery_mode = true;
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("<title>Recovery Mode &#8212; Log In &lsaquo; Example Site &#8212; Vestibule</title>"));
}

#[test]
fn test_login_title_filter_receives_the_original_title() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_text_filter("login_title", DEFAULT_PRIORITY, |_, args| {
            format!("only: {}", args.original.clone().unwrap_or_default())
        });
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("<title>only: Log In</title>"));
}

#[test]
fn test_shake_code_registers_footer_action_once_at_priority_12() {
    let mut errors = LoginErrors::new();
    errors.add("invalidcombo", "Unknown combination.");
    let (_, hooks) = render_with_errors(errors);

    assert!(hooks.has_action_at("login_footer", 12));
    assert_eq!(hooks.action_count("login_footer"), 1);
}

#[test]
fn test_shake_matches_any_code_in_the_collection() {
    let mut errors = LoginErrors::new();
    errors.add("unknown_code", "Something else.");
    errors.add("incorrect_password", "Wrong password.");
    let (_, hooks) = render_with_errors(errors);

    assert!(hooks.has_action_at("login_footer", 12));
}

#[test]
fn test_non_shake_code_registers_nothing() {
    let mut errors = LoginErrors::new();
    errors.add("unknown_code", "Something else.");
    let (_, hooks) = render_with_errors(errors);

    assert!(!hooks.has_action("login_footer"));
}

#[test]
fn test_shake_error_codes_filter_can_disarm_the_shake() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_list_filter("shake_error_codes", DEFAULT_PRIORITY, |_, _| Vec::new());
    let mut errors = LoginErrors::new();
    errors.add("invalidcombo", "Unknown combination.");
    let mut ctx = RenderContext::new("login");
    let (_, hooks) = render(
        &state,
        &mut ctx,
        HeaderArgs {
            title: None,
            message: "",
            errors: Some(errors),
        },
    );

    assert!(!hooks.has_action("login_footer"));
}

#[test]
fn test_single_error_renders_a_paragraph() {
    let mut errors = LoginErrors::new();
    errors.add("incorrect_password", "Wrong password.");
    let (out, _) = render_with_errors(errors);

    assert!(out.contains("id=\"login_error\""));
    assert!(out.contains("<p>Wrong password.</p>"));
    assert!(!out.contains("<ul"));
}

#[test]
fn test_multiple_errors_render_an_ordered_list() {
    let mut errors = LoginErrors::new();
    errors.add("empty_username", "Enter a username.");
    errors.add("empty_password", "Enter a password.");
    let (out, _) = render_with_errors(errors);

    assert!(out.contains("<ul class=\"login-error-list\">"));
    let first = out.find("<li>Enter a username.</li>").expect("first item");
    let second = out.find("<li>Enter a password.</li>").expect("second item");
    assert!(first < second);
}

#[test]
fn test_message_severity_renders_in_the_info_panel() {
    let mut errors = LoginErrors::new();
    errors.add_with_severity("loggedout", "You are now logged out.", Severity::Message);
    let (out, _) = render_with_errors(errors);

    assert!(out.contains("id=\"login-message\""));
    assert!(out.contains("<p>You are now logged out.</p>"));
    assert!(!out.contains("id=\"login_error\""));
}

#[test]
fn test_mixed_severities_render_both_panels() {
    let mut errors = LoginErrors::new();
    errors.add_with_severity("updated", "Settings saved.", Severity::Message);
    errors.add("incorrect_password", "Wrong password.");
    let (out, _) = render_with_errors(errors);

    assert!(out.contains("id=\"login-message\""));
    assert!(out.contains("id=\"login_error\""));
}

#[test]
fn test_no_errors_renders_no_notices() {
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(!out.contains("id=\"login_error\""));
    assert!(!out.contains("id=\"login-message\""));
}

#[test]
fn test_interim_login_adds_class_and_transparent_style() {
    let mut ctx = RenderContext::new("login");
    ctx.interim_login = InterimLogin::Active;
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("interim-login"));
    assert!(!out.contains("interim-login-success"));
    assert!(out.contains("html{background-color: transparent;}"));
}

#[test]
fn test_interim_login_success_adds_both_classes() {
    let mut ctx = RenderContext::new("login");
    ctx.interim_login = InterimLogin::Success;
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("interim-login "));
    assert!(out.contains("interim-login-success"));
}

#[test]
fn test_confirm_admin_email_suppresses_screen_reader_title() {
    let mut ctx = RenderContext::new("confirm_admin_email");
    let (out, _) = render(
        &BASE,
        &mut ctx,
        HeaderArgs {
            title: Some("Administration email verification"),
            message: "",
            errors: None,
        },
    );

    assert!(!out.contains("screen-reader-text"));
}

#[test]
fn test_other_actions_emit_screen_reader_title_exactly_once() {
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert_eq!(out.matches("<h1 class=\"screen-reader-text\">").count(), 1);
}

#[test]
fn test_loggedout_code_emits_session_storage_cleanup() {
    let mut errors = LoginErrors::new();
    errors.add_with_severity("loggedout", "You are now logged out.", Severity::Message);
    let (out, _) = render_with_errors(errors);

    assert!(out.contains("vestibule-autosave-"));
    assert!(out.contains("catch(e){}"));
}

#[test]
fn test_other_codes_do_not_emit_session_storage_cleanup() {
    let mut errors = LoginErrors::new();
    errors.add("incorrect_password", "Wrong password.");
    let (out, _) = render_with_errors(errors);

    assert!(!out.contains("vestibule-autosave-"));
}

#[test]
fn test_locale_body_class_is_lowercase_and_hyphenated() {
    let mut state = BASE.clone();
    state.locale = "pt_BR".to_string();
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("locale-pt-br"));
}

#[test]
fn test_hostile_locale_is_sanitized_in_body_class() {
    let mut state = BASE.clone();
    state.locale = "zz_\"<XX>\"".to_string();
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("locale-zz-xx"));
}

#[test]
fn test_rtl_locale_adds_class_and_direction() {
    let mut state = BASE.clone();
    state.locale = "he_IL".to_string();
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("lang=\"he-IL\" dir=\"rtl\""));
    assert!(out.contains(" rtl "));
}

#[test]
fn test_body_class_filter_sees_the_action() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_list_filter("login_body_class", DEFAULT_PRIORITY, |mut classes, args| {
            classes.push(format!("from-{}", args.action.clone().unwrap_or_default()));
            classes
        });
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("from-login"));
}

#[test]
fn test_body_class_starts_with_action_and_ui_marker() {
    let mut ctx = RenderContext::new("lostpassword");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("<body class=\"login no-js login-action-lostpassword vestibule-ui"));
}

#[test]
fn test_legacy_error_is_folded_in_and_consumed() {
    let mut ctx = RenderContext::new("login");
    ctx.set_legacy_error("Legacy failure.");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("id=\"login_error\""));
    assert!(out.contains("<p>Legacy failure.</p>"));
    assert_eq!(ctx.take_legacy_error(), None);
}

#[test]
fn test_message_passes_through_its_filter_before_emission() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_text_filter("login_message", DEFAULT_PRIORITY, |m, _| m.replace("draft", "final"));
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(
        &state,
        &mut ctx,
        HeaderArgs {
            title: None,
            message: "<p class=\"message\">draft text</p>",
            errors: None,
        },
    );

    assert!(out.contains("<p class=\"message\">final text</p>"));
}

#[test]
fn test_login_header_action_fires_after_body_opens() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_action("login_header", DEFAULT_PRIORITY, |_, out| {
            out.push_str("<!-- banner -->");
        });
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    let body = out.find("<body").expect("body tag");
    let banner = out.find("<!-- banner -->").expect("banner");
    let login_div = out.find("<div id=\"login\">").expect("login container");
    assert!(body < banner && banner < login_div);
}

#[test]
fn test_robots_referrer_and_viewport_are_emitted_in_head() {
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("<meta name=\"robots\" content=\"noindex, noarchive\" />"));
    assert!(out.contains("<meta name=\"referrer\" content=\"strict-origin-when-cross-origin\" />"));
    assert!(out.contains("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />"));
}

#[test]
fn test_header_logo_defaults() {
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.contains("href=\"https://vestibule.dev/\""));
    assert!(out.contains(">Powered by Vestibule</a>"));
}

#[test]
fn test_header_url_filter_rewrites_the_logo_link() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_text_filter("login_headerurl", DEFAULT_PRIORITY, |_, _| {
            "https://intranet.example.com/".to_string()
        });
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains("href=\"https://intranet.example.com/\""));
}

#[test]
fn test_deprecated_headertitle_wins_when_nonempty() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_text_filter("login_headertitle", DEFAULT_PRIORITY, |_, _| "Acme".to_string());
    state
        .hooks
        .add_text_filter("login_headertext", DEFAULT_PRIORITY, |t, _| format!("{} Portal", t));
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains(">Acme Portal</a>"));
    assert!(!out.contains("Powered by Vestibule"));
}

#[test]
fn test_headertext_filter_decides_when_deprecated_hook_is_silent() {
    let mut state = BASE.clone();
    state
        .hooks
        .add_text_filter("login_headertext", DEFAULT_PRIORITY, |_, _| "Acme Intranet".to_string());
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&state, &mut ctx, HeaderArgs::default());

    assert!(out.contains(">Acme Intranet</a>"));
}

#[test]
fn test_document_is_left_open_for_the_form() {
    let mut ctx = RenderContext::new("login");
    let (out, _) = render(&BASE, &mut ctx, HeaderArgs::default());

    assert!(out.trim_end().ends_with("</h1>") || out.trim_end().ends_with("<div id=\"login\">"));
    assert!(!out.contains("</body>"));
    assert!(!out.contains("</html>"));
}
