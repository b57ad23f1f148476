use crate::patterns::{CLASS_ASSIGN_RE, OPENING_TAG_RE, QUOTED_CLASS_RE};

/// The wrapper candidate of a class list: its first entry
pub fn pick_wrapper_class(classes: &[String]) -> Option<&str> {
    classes.first().map(String::as_str)
}

/// Make sure the first tag of `html` carries `wrapper` as a class.
///
/// A leading `.` on `wrapper` is ignored. The class is appended to an
/// existing quoted class attribute or added as a new one. Markup that already
/// has the class, or whose first tag has an unquoted class, is returned as is.
pub fn ensure_wrapper_class(html: &str, wrapper: &str) -> String {
    let class = wrapper.trim().trim_start_matches('.');
    if html.is_empty() || class.is_empty() {
        return html.to_string();
    }

    let Some(tag_caps) = OPENING_TAG_RE.captures(html) else {
        return html.to_string();
    };
    let Some(tag) = tag_caps.get(0) else {
        return html.to_string();
    };
    let tag_text = tag.as_str();

    let updated = match QUOTED_CLASS_RE.captures(tag_text) {
        Some(caps) => {
            let existing = &caps[3];
            if existing.split_whitespace().any(|token| token == class) {
                return html.to_string();
            }
            let value = match existing.trim() {
                "" => class.to_string(),
                classes => format!("{} {}", classes, class),
            };
            let Some(attr) = caps.get(1) else {
                return html.to_string();
            };
            format!(
                "{}class={quote}{}{quote}{}",
                &tag_text[..attr.start()],
                value,
                &tag_text[attr.end()..],
                quote = &caps[2]
            )
        }
        None if CLASS_ASSIGN_RE.is_match(tag_text) => return html.to_string(),
        None => {
            let name = &tag_caps[1];
            format!("<{} class=\"{}\"{}", name, class, &tag_text[1 + name.len()..])
        }
    };

    format!("{}{}{}", &html[..tag.start()], updated, &html[tag.end()..])
}
