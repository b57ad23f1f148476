use crate::patterns::H1_TAG_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

/// Keeps the first `<h1>` and demotes every later one to `<h2>`
///
/// The closing tag of a demoted heading is renamed with it.
pub struct SingleH1Rule;

impl RewriteRule for SingleH1Rule {
    fn name(&self) -> &'static str {
        "single-h1"
    }

    fn description(&self) -> &'static str {
        "Allow at most one level-1 heading"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut seen_h1 = false;
        let mut demoting = false;

        H1_TAG_RE.replace_all(text, |caps: &Captures| {
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            if &caps[1] == "/" {
                return if demoting {
                    demoting = false;
                    "</h2>".to_string()
                } else {
                    caps[0].to_string()
                };
            }

            demoting = seen_h1;
            seen_h1 = true;
            if demoting {
                format!("<h2{}>", attrs)
            } else {
                caps[0].to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demotes_later_headings() {
        let html = r#"<h1>Title</h1><h1 class="sub">Second</h1><h1>Third</h1>"#;
        assert_eq!(
            SingleH1Rule.rewrite(html),
            r#"<h1>Title</h1><h2 class="sub">Second</h2><h2>Third</h2>"#
        );
    }

    #[test]
    fn test_single_heading_untouched() {
        let html = "<h1>Only</h1><h2>Sub</h2>";
        assert_eq!(SingleH1Rule.rewrite(html), html);
    }

    #[test]
    fn test_other_levels_untouched() {
        let html = "<h2>a</h2><h3>b</h3><header>c</header>";
        assert!(matches!(SingleH1Rule.rewrite(html), Cow::Borrowed(_)));
    }

    #[test]
    fn test_idempotent() {
        let once = SingleH1Rule.rewrite("<h1>a</h1>\n<h1>b</h1>").into_owned();
        assert_eq!(once, "<h1>a</h1>\n<h2>b</h2>");
        assert_eq!(SingleH1Rule.rewrite(&once), once);
    }
}
