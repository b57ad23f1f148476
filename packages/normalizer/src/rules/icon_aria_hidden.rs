use crate::attributes::find_attribute;
use crate::patterns::ICON_TAG_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// Hides decorative `ico-` icons from assistive technology
pub struct IconAriaHiddenRule;

impl RewriteRule for IconAriaHiddenRule {
    fn name(&self) -> &'static str {
        "icon-aria-hidden"
    }

    fn description(&self) -> &'static str {
        "Add aria-hidden=\"true\" to ico- icons"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        ICON_TAG_RE.replace_all(text, |caps: &Captures| {
            let attrs = &caps[1];
            if !needs_aria_hidden(attrs) {
                return caps[0].to_string();
            }
            match attrs.trim_end().strip_suffix('/') {
                Some(body) => format!("<i{} aria-hidden=\"true\" />", body.trim_end()),
                None => format!("<i{} aria-hidden=\"true\">", attrs.trim_end()),
            }
        })
    }
}

fn needs_aria_hidden(attrs: &str) -> bool {
    if find_attribute(attrs, "aria-hidden").is_some() {
        return false;
    }
    find_attribute(attrs, "class")
        .and_then(|class| class.value)
        .is_some_and(|value| value.split_whitespace().any(|token| token.contains("ico-")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_aria_hidden() {
        assert_eq!(
            IconAriaHiddenRule.rewrite(r#"<i class="ico-search ico-normal"></i>"#),
            r#"<i class="ico-search ico-normal" aria-hidden="true"></i>"#
        );
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(
            IconAriaHiddenRule.rewrite(r#"<i class="ico-x"/>"#),
            r#"<i class="ico-x" aria-hidden="true" />"#
        );
    }

    #[test]
    fn test_existing_attribute_kept() {
        let html = r#"<i class="ico-x" aria-hidden="false"></i>"#;
        assert_eq!(IconAriaHiddenRule.rewrite(html), html);
    }

    #[test]
    fn test_data_class_is_not_the_class() {
        let html = r#"<i data-class="ico-x" class="emphasis"></i>"#;
        assert_eq!(IconAriaHiddenRule.rewrite(html), html);
        assert_eq!(
            IconAriaHiddenRule.rewrite(r#"<i data-class="x" title="aria-hidden" class="ico-x"></i>"#),
            r#"<i data-class="x" title="aria-hidden" class="ico-x" aria-hidden="true"></i>"#
        );
    }

    #[test]
    fn test_plain_italics_untouched() {
        let html = r#"<i class="emphasis">word</i><i>plain</i>"#;
        assert_eq!(IconAriaHiddenRule.rewrite(html), html);
    }
}
