use std::net::SocketAddr;
use std::process;

use askama::Template;
use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use vestibule::chrome::{login_footer, login_header, HeaderArgs};
use vestibule::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use vestibule::context::{InterimLogin, RenderContext};
use vestibule::hooks::KNOWN_HOOKS;
use vestibule::login_errors::{LoginErrors, Severity};
use vestibule::models::AppState;
use vestibule::routes::build_router;
use vestibule::templates::LoginFormTemplate;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    AppState::from_env()
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state.clone());
    tracing::info!(%addr, site = %state.site_name, "Starting Vestibule login server");
    println!(
        "{} {}",
        yansi::Paint::new("Login screen served on").green(),
        yansi::Paint::new(format!("http://{}/login", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

/// Assemble one full login page for the `render` subcommand.
fn render_preview(
    state: &AppState,
    action: &str,
    title: Option<&str>,
    message: &str,
    errors: LoginErrors,
    interim: bool,
) -> String {
    let mut ctx = RenderContext::new(action);
    if interim {
        ctx.interim_login = InterimLogin::Active;
    }

    let form = match (LoginFormTemplate {
        user_login: "",
        redirect_to: "/",
        interim,
        lost_password_url: "/login?action=lostpassword",
    })
    .render()
    {
        Ok(html) => html,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to render the form body").red(), e);
            process::exit(1);
        }
    };

    let mut hooks = state.hooks();
    let mut out = String::new();
    login_header(
        state,
        &mut ctx,
        &mut hooks,
        HeaderArgs {
            title,
            message,
            errors: Some(errors),
        },
        &mut out,
    );
    out.push_str(&form);
    login_footer(state, &hooks, ctx.interim_login, &mut out);
    out
}

#[derive(Parser)]
#[command(
    name = "vestibule",
    author,
    version,
    about = "Vestibule login screen server",
    long_about = r#"Vestibule — the pluggable login screen for your site.

Serves the login page chrome (head, branding, message and error panels)
around the host platform's login form, with named extension hooks for
plugins. Use the `--env-file` option or environment variables (SITE_NAME,
SITE_LOCALE, PUBLIC_BASE_URL, RECOVERY_MODE, ADMIN_EMAIL) to configure
the site.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Preview the rejected-credentials page in the terminal:
      vestibule render --error invalidcombo
  3) List the extension hooks plugins can attach to:
      vestibule hooks
"#,
    after_help = "Use `vestibule <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (site name, locale, base URL, admin email)
    #[command(
        about = "Validate configuration and print the resolved values.",
        long_about = "Resolve the site configuration from environment variables (optionally loading an env file first) and check it for problems: a malformed locale, an unusable admin email, a missing public base URL."
    )]
    CheckConfig { env_file: Option<String> },
    /// Render a login page to stdout
    #[command(
        about = "Render the login page chrome to stdout",
        long_about = "Assemble the full login page for a given action and error set and print it, so themes and plugins can be checked without a browser. Repeat `--error` to preview multi-error rendering."
    )]
    Render {
        /// Login action to render the chrome for
        #[arg(long, default_value = "login")]
        action: String,
        /// Override the page title
        #[arg(long)]
        title: Option<String>,
        /// Message to display above the form
        #[arg(long)]
        message: Option<String>,
        /// Error code to preview (repeatable)
        #[arg(long = "error")]
        errors: Vec<String>,
        /// Include the logged-out notice
        #[arg(long, default_value_t = false)]
        loggedout: bool,
        /// Render in interim (modal) mode
        #[arg(long, default_value_t = false)]
        interim: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// List the extension hooks the login screen exposes
    Hooks,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Dispatch CLI commands. If no command provided, serve the login screen by default
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            let mut ok = true;
            if !state
                .locale
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                eprintln!(
                    "{} {:?}",
                    yansi::Paint::new("SITE_LOCALE contains characters that are not valid in a locale code:").red(),
                    state.locale
                );
                ok = false;
            }
            if !state.admin_email.contains('@') {
                eprintln!(
                    "{} {:?}",
                    yansi::Paint::new("ADMIN_EMAIL does not look like an email address:").red(),
                    state.admin_email
                );
                ok = false;
            }
            if std::env::var("PUBLIC_BASE_URL").unwrap_or_default().trim().is_empty() {
                println!(
                    "{} {}",
                    yansi::Paint::new("PUBLIC_BASE_URL is not configured; the back link will use").yellow(),
                    state.public_base_url
                );
            }
            println!("site name        {}", yansi::Paint::new(&state.site_name).cyan());
            println!("locale           {}", yansi::Paint::new(&state.locale).cyan());
            println!("public base URL  {}", yansi::Paint::new(&state.public_base_url).cyan());
            println!("admin email      {}", yansi::Paint::new(&state.admin_email).cyan());
            println!("recovery mode    {}", yansi::Paint::new(state.recovery_mode).cyan());
            if ok {
                println!("{}", yansi::Paint::new("Configuration looks valid").green());
            } else {
                process::exit(1);
            }
        }
        Commands::Render {
            action,
            title,
            message,
            errors,
            loggedout,
            interim,
            env_file,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            let mut collection = LoginErrors::new();
            if loggedout {
                collection.add_with_severity("loggedout", "You are now logged out.", Severity::Message);
            }
            for code in &errors {
                collection.add(code, &format!("Preview message for \"{}\".", code));
            }
            let page = render_preview(
                &state,
                &action,
                title.as_deref(),
                message.as_deref().unwrap_or(""),
                collection,
                interim,
            );
            println!("{}", page);
        }
        Commands::Hooks => {
            let state = build_state_from_env(None);

            // Render a throwaway page with a shake error so the listing
            // includes the listeners the renderer registers itself.
            let mut hooks = state.hooks();
            let mut ctx = RenderContext::new("login");
            let mut probe = LoginErrors::new();
            probe.add("invalidcombo", "probe");
            let mut scratch = String::new();
            login_header(
                &state,
                &mut ctx,
                &mut hooks,
                HeaderArgs {
                    title: None,
                    message: "",
                    errors: Some(probe),
                },
                &mut scratch,
            );

            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL);
            table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            if let Some((Width(w), _)) = terminal_size() {
                table.set_width(w - 4);
            }
            table.set_header(vec!["Hook", "Kind", "Listeners", "Description"]);
            for (name, kind, description) in KNOWN_HOOKS {
                table.add_row(vec![
                    name.to_string(),
                    kind.to_string(),
                    hooks.listener_count(name).to_string(),
                    description.to_string(),
                ]);
            }
            println!("\n{table}\n");
        }
    }
}
