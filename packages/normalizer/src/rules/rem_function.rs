use crate::patterns::REM_FUNCTION_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// `width: rem(24px);` → `@include rem(width, 24);`
pub struct RemFunctionRule;

impl RewriteRule for RemFunctionRule {
    fn name(&self) -> &'static str {
        "rem-function-to-mixin"
    }

    fn description(&self) -> &'static str {
        "Replace rem() function values with the rem mixin"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        REM_FUNCTION_RE.replace_all(text, |caps: &Captures| {
            let value = caps[3].replace("px", "");
            format!("{}@include rem({}, {});", &caps[1], &caps[2], value.trim())
        })
    }
}
