use crate::patterns::{SHADOW3_RE, SHADOW4_RE, SHADOW_DECL_RE};
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// `box-shadow: 0 4px 8px 0 rgba(...);` → `@include rem(box-shadow, 0 4 8 0 rgba(...));`
pub struct ShadowsRule;

impl RewriteRule for ShadowsRule {
    fn name(&self) -> &'static str {
        "shadows"
    }

    fn description(&self) -> &'static str {
        "Convert box-shadow and text-shadow lengths to the rem mixin"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        SHADOW_DECL_RE.replace_all(text, |caps: &Captures| {
            let value = caps[3].trim();
            if value.contains("calc(") || value.eq_ignore_ascii_case("none") {
                return caps[0].to_string();
            }
            match shadow_value(value) {
                Some(value) => format!("{}@include rem({}, {});", &caps[1], &caps[2], value),
                None => caps[0].to_string(),
            }
        })
    }
}

/// Mixin argument for a four- or three-length shadow followed by a color
pub fn shadow_value(value: &str) -> Option<String> {
    if let Some(caps) = SHADOW4_RE.captures(value) {
        return Some(format!("{} {} {} {} {}", &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]));
    }
    SHADOW3_RE
        .captures(value)
        .map(|caps| format!("{} {} {} {}", &caps[1], &caps[2], &caps[3], &caps[4]))
}
