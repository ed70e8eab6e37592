//! Vestibule: a pluggable login-screen front end.
//!
//! The library renders the login page chrome — document head, opening
//! body, message and error panels — around a host platform's login form,
//! and exposes named extension points ([`hooks`]) so plugins can inject
//! head content, rewrite titles, adjust body classes and append markup.
//! The binary wraps it in an axum preview server and a small CLI.

pub mod chrome;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod hooks;
pub mod login_errors;
pub mod models;
pub mod routes;
pub mod templates;
pub mod utils;
