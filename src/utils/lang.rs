use super::html_class::sanitize_html_class;

/// Languages written right-to-left, matched against the locale's language
/// subtag (the part before `_` or `-`).
const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur", "ps", "sd", "ug", "yi"];

pub fn is_rtl(locale: &str) -> bool {
    let lang = locale
        .split(['_', '-'])
        .next()
        .unwrap_or(locale)
        .to_lowercase();
    RTL_LANGUAGES.contains(&lang.as_str())
}

/// Attributes for the `<html>` element: `lang="en-US"`, plus `dir="rtl"`
/// for right-to-left locales. The tag is reduced to characters valid in a
/// BCP 47 tag so a malformed locale cannot break out of the attribute.
pub fn language_attributes(locale: &str) -> String {
    let tag: String = locale
        .replace('_', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if is_rtl(locale) {
        format!("lang=\"{}\" dir=\"rtl\"", tag)
    } else {
        format!("lang=\"{}\"", tag)
    }
}

/// Body class derived from the locale: lowercased, `_` replaced with `-`,
/// sanitized to a valid class token and prefixed with `locale-`.
pub fn locale_css_class(locale: &str) -> String {
    let token = locale.to_lowercase().replace('_', "-");
    format!("locale-{}", sanitize_html_class(&token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_class_is_lowercase_and_hyphenated() {
        assert_eq!(locale_css_class("en_US"), "locale-en-us");
        assert_eq!(locale_css_class("pt_BR"), "locale-pt-br");
    }

    #[test]
    fn locale_class_survives_hostile_input() {
        assert_eq!(locale_css_class("zz_\"<x>\""), "locale-zz-x");
    }

    #[test]
    fn rtl_detection_uses_language_subtag() {
        assert!(is_rtl("he_IL"));
        assert!(is_rtl("ar"));
        assert!(!is_rtl("en_US"));
    }

    #[test]
    fn language_attributes_include_direction() {
        assert_eq!(language_attributes("en_US"), "lang=\"en-US\"");
        assert_eq!(language_attributes("he_IL"), "lang=\"he-IL\" dir=\"rtl\"");
    }
}
