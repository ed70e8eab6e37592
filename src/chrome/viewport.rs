/// Outputs the viewport meta tag for the login page. Registered as a
/// `login_head` action by the header renderer.
pub fn viewport_meta(out: &mut String) {
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n");
}
