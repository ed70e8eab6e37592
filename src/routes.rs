use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default login stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/login.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve login.css - use custom if provided, otherwise use the embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::login::root_get))
        .route(
            "/login",
            get(handlers::login::login_get).post(handlers::login::login_post),
        )
        .route(
            "/static/login.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        // Serve any further static assets with cache-control header
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
