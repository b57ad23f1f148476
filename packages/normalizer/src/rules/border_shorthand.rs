use crate::patterns::{BORDER_DECL_RE, BORDER_SHORTHAND_RE, BORDER_WIDTH_RE};
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// `border: 1px solid #333;` → `@include rem(border, 1 solid #333);`
pub struct BorderShorthandRule;

impl RewriteRule for BorderShorthandRule {
    fn name(&self) -> &'static str {
        "border-shorthand"
    }

    fn description(&self) -> &'static str {
        "Convert border shorthands to the rem mixin"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        BORDER_DECL_RE.replace_all(text, |caps: &Captures| {
            let value = caps[3].trim();
            if value.contains("calc(") || value.eq_ignore_ascii_case("none") || value == "0" {
                return caps[0].to_string();
            }
            match border_value(value) {
                Some(value) => format!("{}@include rem({}, {});", &caps[1], &caps[2], value),
                None => caps[0].to_string(),
            }
        })
    }
}

/// Mixin argument for a `<width> <style> <color>` shorthand or a bare width
pub fn border_value(value: &str) -> Option<String> {
    if let Some(caps) = BORDER_SHORTHAND_RE.captures(value) {
        return Some(format!("{} {} {}", &caps[1], &caps[2], &caps[3]));
    }
    BORDER_WIDTH_RE.captures(value).map(|caps| caps[1].to_string())
}
