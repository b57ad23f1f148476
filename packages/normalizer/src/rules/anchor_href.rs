use crate::patterns::ANCHOR_HREF_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// Blanks every anchor `href`; links are wired up by the consumer
pub struct AnchorHrefRule;

impl RewriteRule for AnchorHrefRule {
    fn name(&self) -> &'static str {
        "empty-anchor-href"
    }

    fn description(&self) -> &'static str {
        "Force anchor href values to the empty string"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        ANCHOR_HREF_RE.replace_all(text, |caps: &Captures| {
            if caps[2].is_empty() {
                caps[0].to_string()
            } else {
                format!("<a {}href=\"\"", &caps[1])
            }
        })
    }
}
