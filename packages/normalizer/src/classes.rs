//! Class-name extraction from generated markup and stylesheets.
//!
//! The extracted set is fed back into the next generation round so the model
//! reuses the same vocabulary. Output is always sorted and deduplicated.

use crate::patterns::{CLASS_ATTR_RE, CLASS_SELECTOR_RE};
use std::collections::BTreeSet;

/// Every whitespace-separated token of every `class` attribute
pub fn class_names_from_markup(markup: &str) -> Vec<String> {
    let mut names = BTreeSet::new();
    for captures in CLASS_ATTR_RE.captures_iter(markup) {
        names.extend(captures[2].split_whitespace().map(str::to_string));
    }
    names.into_iter().collect()
}

/// Every `.identifier` class selector
pub fn class_names_from_stylesheet(stylesheet: &str) -> Vec<String> {
    CLASS_SELECTOR_RE
        .captures_iter(stylesheet)
        .map(|captures| captures[1].to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_markup_classes() {
        let markup = r#"
            <section class="main-container  hero">
                <h2 class='hero-title'>Hi</h2>
                <p class="hero">Text</p>
                <span class="">empty</span>
            </section>
        "#;
        assert_eq!(
            class_names_from_markup(markup),
            vec!["hero", "hero-title", "main-container"]
        );
    }

    #[test]
    fn test_stylesheet_classes() {
        let scss = r#"
            .card {
                &.is-active { color: red; }
                .card__title, .card-body { @include rem(margin, 0.5); }
                > .btn:hover { opacity: .8; }
            }
        "#;
        assert_eq!(
            class_names_from_stylesheet(scss),
            vec!["btn", "card", "card-body", "card__title", "is-active"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(class_names_from_markup("").is_empty());
        assert!(class_names_from_stylesheet("").is_empty());
    }

    fn class_attr() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z][a-zA-Z0-9_-]{0,8}", 0..4)
    }

    proptest! {
        #[test]
        fn prop_markup_classes_sorted_unique_subset(attrs in prop::collection::vec(class_attr(), 0..5)) {
            let markup: String = attrs
                .iter()
                .map(|tokens| format!("<div class=\"{}\"></div>", tokens.join(" ")))
                .collect();

            let names = class_names_from_markup(&markup);

            let mut sorted = names.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&names, &sorted);

            let all: BTreeSet<&String> = attrs.iter().flatten().collect();
            for name in &names {
                prop_assert!(all.contains(name));
            }
        }
    }
}
