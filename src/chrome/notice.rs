use crate::utils::esc_attr;

/// Presentation options for [`admin_notice`].
pub struct NoticeArgs<'a> {
    /// Notice type, appended to the `notice-` class (`error`, `info`,
    /// `warning`, `success`).
    pub kind: &'a str,
    pub id: Option<&'a str>,
    pub additional_classes: &'a [&'a str],
    /// Wrap the content in a `<p>`. Callers that already supply block
    /// markup turn this off.
    pub paragraph_wrap: bool,
}

impl Default for NoticeArgs<'_> {
    fn default() -> Self {
        Self {
            kind: "info",
            id: None,
            additional_classes: &[],
            paragraph_wrap: true,
        }
    }
}

/// Render a standardized notice box around pre-built content.
pub fn admin_notice(content: &str, args: &NoticeArgs, out: &mut String) {
    let mut classes = vec!["notice".to_string(), format!("notice-{}", args.kind)];
    for class in args.additional_classes {
        classes.push((*class).to_string());
    }
    let id_attr = match args.id {
        Some(id) => format!(" id=\"{}\"", esc_attr(id)),
        None => String::new(),
    };
    if args.paragraph_wrap {
        out.push_str(&format!(
            "<div{} class=\"{}\"><p>{}</p></div>\n",
            id_attr,
            esc_attr(&classes.join(" ")),
            content
        ));
    } else {
        out.push_str(&format!(
            "<div{} class=\"{}\">{}</div>\n",
            id_attr,
            esc_attr(&classes.join(" ")),
            content
        ));
    }
}
