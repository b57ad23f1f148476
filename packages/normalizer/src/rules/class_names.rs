use crate::kebab::to_kebab_case;
use crate::patterns::CLASS_ATTR_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// Rewrites every class token to kebab-case
///
/// Tokens that convert to nothing (`"__"`) are dropped. Attributes are always
/// re-emitted with double quotes.
pub struct ClassNamesRule;

impl RewriteRule for ClassNamesRule {
    fn name(&self) -> &'static str {
        "kebab-case-classes"
    }

    fn description(&self) -> &'static str {
        "Convert class attribute tokens to kebab-case"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        CLASS_ATTR_RE.replace_all(text, |caps: &Captures| {
            let tokens: Vec<String> = caps[2]
                .split_whitespace()
                .map(to_kebab_case)
                .filter(|token| !token.is_empty())
                .collect();
            format!("{}class=\"{}\"", &caps[1], tokens.join(" "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_every_token() {
        let out = ClassNamesRule.rewrite(r#"<div class="mainContainer hero_Block">"#);
        assert_eq!(out, r#"<div class="main-container hero-block">"#);
    }

    #[test]
    fn test_single_quotes_become_double() {
        let out = ClassNamesRule.rewrite("<p class='bodyText'>");
        assert_eq!(out, r#"<p class="body-text">"#);
    }

    #[test]
    fn test_drops_empty_tokens() {
        let out = ClassNamesRule.rewrite(r#"<p class="__ lead">"#);
        assert_eq!(out, r#"<p class="lead">"#);
    }

    #[test]
    fn test_data_class_untouched() {
        let html = r#"<div data-class="someValue" class="heroBlock">"#;
        assert_eq!(ClassNamesRule.rewrite(html), r#"<div data-class="someValue" class="hero-block">"#);
    }

    #[test]
    fn test_idempotent() {
        let once = ClassNamesRule.rewrite(r#"<a class="navLink  isActive">"#).into_owned();
        assert_eq!(ClassNamesRule.rewrite(&once), once);
    }
}
