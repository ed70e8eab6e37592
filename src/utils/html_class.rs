/// Reduce a string to a valid CSS class token: ASCII letters, digits,
/// hyphens and underscores survive, everything else is dropped.
pub fn sanitize_html_class(class: &str) -> String {
    class
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
