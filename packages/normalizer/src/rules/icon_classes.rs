use crate::attributes::find_attribute;
use crate::patterns::{HYPHEN_RUN_RE, ICON_TAG_RE};
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

const ICON_MARKER: &str = "icon";
const ICON_PREFIX: &str = "ico-";
const ICON_SIZE_CLASS: &str = "ico-normal";

/// Standardizes `<i>` icon classes to an `ico-<name> ico-normal` pair
///
/// Any class token containing `icon` is treated as an icon marker, so
/// `iconic-quote` is rewritten as well.
pub struct IconClassesRule;

impl RewriteRule for IconClassesRule {
    fn name(&self) -> &'static str {
        "icon-classes"
    }

    fn description(&self) -> &'static str {
        "Rename icon classes to ico-<name> ico-normal"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        ICON_TAG_RE.replace_all(text, |caps: &Captures| {
            let attrs = &caps[1];
            match standardize_class_attr(attrs) {
                Some(attrs) => format!("<i{}>", attrs),
                None => caps[0].to_string(),
            }
        })
    }
}

/// Derive the `ico-` suffix from an icon token: `icon-search` → `search`
pub fn icon_name(token: &str) -> String {
    let mut name = token.to_string();
    while name.contains(ICON_MARKER) {
        name = name.replace(ICON_MARKER, "");
    }
    let name = HYPHEN_RUN_RE.replace_all(&name, "-");
    let name = name.trim_matches('-');
    if name.is_empty() {
        "default".to_string()
    } else {
        name.to_string()
    }
}

fn is_standardized(tokens: &[&str]) -> bool {
    tokens.contains(&ICON_SIZE_CLASS)
        && tokens
            .iter()
            .any(|token| token.starts_with(ICON_PREFIX) && *token != ICON_SIZE_CLASS)
}

/// Rewritten attribute text, or `None` when the tag needs no change
fn standardize_class_attr(attrs: &str) -> Option<String> {
    let class = find_attribute(attrs, "class")?;
    let tokens: Vec<&str> = class.value?.split_whitespace().collect();

    if !tokens.iter().any(|token| token.contains(ICON_MARKER)) || is_standardized(&tokens) {
        return None;
    }

    let mut classes: Vec<String> = Vec::with_capacity(tokens.len() + 1);
    for token in tokens {
        let class = if token.contains(ICON_MARKER) {
            format!("{}{}", ICON_PREFIX, icon_name(token))
        } else {
            token.to_string()
        };
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    if !classes.iter().any(|class| class == ICON_SIZE_CLASS) {
        classes.push(ICON_SIZE_CLASS.to_string());
    }

    Some(format!(
        "{}class=\"{}\"{}",
        &attrs[..class.span.start],
        classes.join(" "),
        &attrs[class.span.end..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name() {
        assert_eq!(icon_name("icon-search"), "search");
        assert_eq!(icon_name("search-icon"), "search");
        assert_eq!(icon_name("icon"), "default");
        assert_eq!(icon_name("arrow-icon-left"), "arrow-left");
        // removing one marker can expose another
        assert_eq!(icon_name("icoiconn"), "default");
    }

    #[test]
    fn test_rewrites_icon_tokens() {
        assert_eq!(
            IconClassesRule.rewrite(r#"<i class="icon-search"></i>"#),
            r#"<i class="ico-search ico-normal"></i>"#
        );
        assert_eq!(
            IconClassesRule.rewrite(r#"<i id="x" class="big menu-icon"></i>"#),
            r#"<i id="x" class="big ico-menu ico-normal"></i>"#
        );
    }

    #[test]
    fn test_standardized_icons_untouched() {
        let html = r#"<i class="ico-search ico-normal icon-legacy"></i>"#;
        assert_eq!(IconClassesRule.rewrite(html), html);
    }

    #[test]
    fn test_non_icon_tags_untouched() {
        let html = r#"<span class="icon-star"></span><img class="icon" src="a.png"><i class="fa"></i>"#;
        assert_eq!(IconClassesRule.rewrite(html), html);
    }

    #[test]
    fn test_reads_the_class_attribute_only() {
        assert_eq!(
            IconClassesRule.rewrite(r#"<i data-class="x" class="my-icon"></i>"#),
            r#"<i data-class="x" class="ico-my ico-normal"></i>"#
        );
        let html = r#"<i title='class="icon-x"' class="fa"></i>"#;
        assert_eq!(IconClassesRule.rewrite(html), html);
    }

    #[test]
    fn test_idempotent() {
        let once = IconClassesRule
            .rewrite(r#"<i class="icon-close"></i><i class='icon'></i>"#)
            .into_owned();
        assert_eq!(once, r#"<i class="ico-close ico-normal"></i><i class="ico-default ico-normal"></i>"#);
        assert_eq!(IconClassesRule.rewrite(&once), once);
    }
}
