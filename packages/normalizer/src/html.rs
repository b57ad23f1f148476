use crate::rules::RuleRegistry;
use tracing::{info, instrument};

/// Rewrite generated markup to the house markup rules.
///
/// Empty input comes back unchanged. Running the result through again is a
/// no-op.
#[instrument(skip_all, fields(len = markup.len()))]
pub fn normalize_html(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let normalized = RuleRegistry::html().apply(markup);
    info!(changed = normalized != markup, "HTML normalization complete");
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_unchanged() {
        assert_eq!(normalize_html(""), "");
    }

    #[test]
    fn test_class_and_href() {
        assert_eq!(
            normalize_html(r#"<div class="mainContainer"><a href="x">Go</a></div>"#),
            r#"<div class="main-container"><a href="">Go</a></div>"#
        );
    }

    #[test]
    fn test_icon_gets_classes_then_aria() {
        assert_eq!(
            normalize_html(r#"<button><i class="searchIcon"></i></button>"#),
            r#"<button type="button"><i class="ico-search ico-normal" aria-hidden="true"></i></button>"#
        );
    }

    #[test]
    fn test_full_fragment() {
        let html = r#"<section class="benefitSection">
  <h1>Why us</h1>
  <div class="benefit_item">Fast</div>
  <div class="benefit_item">Cheap</div>
  <h1 class="footerTitle">Contact</h1>
</section>"#;
        let expected = r#"<section class="benefit-section">
  <h1>Why us</h1>
  <ul>
    <li class="benefit-item">Fast</li>
    <li class="benefit-item">Cheap</li>
</ul>
  <h2 class="footer-title">Contact</h2>
</section>"#;
        let once = normalize_html(html);
        assert_eq!(once, expected);
        assert_eq!(normalize_html(&once), once);
    }
}
