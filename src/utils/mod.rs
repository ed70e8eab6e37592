// Markup helpers
pub mod escape;
pub mod html_class;
pub mod lang;

// Parsing / URL utilities
pub mod parse_flag;
pub mod query_string;

// Re-export all utilities for convenient access
pub use escape::{esc_attr, esc_url};
pub use html_class::sanitize_html_class;
pub use lang::{is_rtl, language_attributes, locale_css_class};
pub use parse_flag::parse_flag;
pub use query_string::build_query_string;
