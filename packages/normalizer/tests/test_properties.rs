//! Postconditions that hold for any fragment built from common generated shapes

use handoff_normalizer::{lint_nesting, normalize_html, normalize_scss};
use proptest::prelude::*;
use regex::Regex;

fn class_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z]{0,6}",
        "[a-z]{1,4}_[a-z]{1,4}",
        Just("searchIcon".to_string()),
        Just("icon".to_string()),
        Just("card-item".to_string()),
        Just("ico-menu ico-normal".to_string()),
    ]
}

fn markup_fragment() -> impl Strategy<Value = String> {
    (class_token(), "[a-zA-Z ]{0,8}", 0..12usize).prop_map(|(class, text, kind)| match kind {
        0 => format!(r#"<div class="{class}">{text}</div>"#),
        1 => format!(r#"<div class="{class}-item">{text}</div>"#),
        2 => format!(r#"<a href="/{text}">{text}</a>"#),
        3 => format!(r#"<a class="{class}" href="">{text}</a>"#),
        4 => format!("<button>{text}</button>"),
        5 => format!(r#"<button class="{class}" type="submit">{text}</button>"#),
        6 => format!(r#"<i class="{class}"></i>"#),
        7 => format!("<h1>{text}</h1>"),
        8 => format!(r#"<h1 class="{class}">{text}</h1>"#),
        9 => format!("<h2>{text}</h2>"),
        10 => format!(r#"<div class="{class}-item"><div class="inner">{text}</div></div>"#),
        _ => text,
    })
}

fn markup() -> impl Strategy<Value = String> {
    let separator = prop_oneof![Just(""), Just(" "), Just("\n"), Just("\n  ")];
    prop::collection::vec((markup_fragment(), separator), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, separator)| format!("{fragment}{separator}"))
            .collect()
    })
}

fn declaration() -> impl Strategy<Value = String> {
    prop_oneof![
        (1..64u32).prop_map(|n| format!("margin: {n}px;")),
        (1..64u32, 1..64u32).prop_map(|(a, b)| format!("padding: {a}px {b}px;")),
        (1..100u32).prop_map(|n| format!("width: {n}%;")),
        Just("height: auto;".to_string()),
        (1..64u32).prop_map(|n| format!("top: calc(50% - {n}px);")),
        (1..64u32).prop_map(|n| format!("font-size: rem({n}px);")),
        Just("color: $color-primary;".to_string()),
        Just("background: $brand-special;".to_string()),
        (1..4u32).prop_map(|n| format!("border: {n}px solid $gray;")),
        Just("box-shadow: 0 2px 4px 0 $black;".to_string()),
        Just("margin: 10px $gap-2em;".to_string()),
        Just("padding: $w-50vh 4px;".to_string()),
        Just("margin: 0 $spacing;".to_string()),
    ]
}

/// A stylesheet whose deepest block sits at `depth`
fn nested_stylesheet(depth: usize, declarations: &[String]) -> String {
    let mut lines = Vec::new();
    for level in 0..depth {
        lines.push(format!("{}.level-{} {{", "  ".repeat(level), level));
    }
    for declaration in declarations {
        lines.push(format!("{}{}", "  ".repeat(depth), declaration));
    }
    for level in (0..depth).rev() {
        lines.push(format!("{}}}", "  ".repeat(level)));
    }
    lines.join("\n")
}

proptest! {
    #[test]
    fn html_normalization_is_idempotent(html in markup()) {
        let once = normalize_html(&html);
        prop_assert_eq!(normalize_html(&once), once);
    }

    #[test]
    fn at_most_one_h1(html in markup()) {
        let h1 = Regex::new(r"<h1[\s>]").unwrap();
        prop_assert!(h1.find_iter(&normalize_html(&html)).count() <= 1);
    }

    #[test]
    fn every_button_has_a_type(html in markup()) {
        let button = Regex::new(r"<button(\s[^>]*)?>").unwrap();
        let out = normalize_html(&html);
        for tag in button.find_iter(&out) {
            prop_assert!(tag.as_str().contains("type="), "{}", tag.as_str());
        }
    }

    #[test]
    fn scss_normalization_is_idempotent(
        depth in 0..7usize,
        declarations in prop::collection::vec(declaration(), 1..6),
    ) {
        let scss = nested_stylesheet(depth, &declarations);
        let once = normalize_scss(&scss);
        prop_assert_eq!(normalize_scss(&once), once);
    }

    #[test]
    fn annotation_appears_only_past_the_limit(
        depth in 0..9usize,
        declarations in prop::collection::vec(declaration(), 1..4),
    ) {
        let out = normalize_scss(&nested_stylesheet(depth, &declarations));
        let annotated = out.contains("nesting deeper than 4 levels");
        prop_assert_eq!(annotated, depth > 4);
        prop_assert_eq!(lint_nesting(&out, 4).is_empty(), depth <= 4);
    }
}
