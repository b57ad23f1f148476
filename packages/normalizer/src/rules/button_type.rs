use crate::attributes::find_attribute;
use crate::patterns::BUTTON_TAG_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// Gives every `<button>` an explicit `type`
pub struct ButtonTypeRule;

impl RewriteRule for ButtonTypeRule {
    fn name(&self) -> &'static str {
        "button-type"
    }

    fn description(&self) -> &'static str {
        "Insert type=\"button\" on buttons without a type attribute"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        BUTTON_TAG_RE.replace_all(text, |caps: &Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            if find_attribute(attrs, "type").is_some() {
                caps[0].to_string()
            } else {
                format!("<button type=\"button\"{}>", attrs)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_type() {
        assert_eq!(ButtonTypeRule.rewrite("<button>Go</button>"), r#"<button type="button">Go</button>"#);
        assert_eq!(
            ButtonTypeRule.rewrite(r#"<button class="btn">Go</button>"#),
            r#"<button type="button" class="btn">Go</button>"#
        );
    }

    #[test]
    fn test_existing_type_kept() {
        let html = r#"<button class="btn" type="submit">Send</button>"#;
        assert_eq!(ButtonTypeRule.rewrite(html), html);
    }

    #[test]
    fn test_data_type_is_not_a_type() {
        assert_eq!(
            ButtonTypeRule.rewrite(r#"<button data-type="x">"#),
            r#"<button type="button" data-type="x">"#
        );
    }

    #[test]
    fn test_type_inside_quoted_value_is_not_a_type() {
        assert_eq!(
            ButtonTypeRule.rewrite(r#"<button aria-label="set type = x">"#),
            r#"<button type="button" aria-label="set type = x">"#
        );
        let html = r#"<button title='type' TYPE="reset">"#;
        assert_eq!(ButtonTypeRule.rewrite(html), html);
    }
}
