use regex::Regex;
use std::sync::LazyLock;

/// First opening tag carrying a class; group 2 is the class value
pub static FIRST_CLASSED_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([a-zA-Z][a-zA-Z0-9-]*)[^>]*?\sclass\s*=\s*["']([^"']+)["']"#).unwrap()
});

pub static SEMANTIC_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(header|nav|main|section|article|aside|footer|figure)\b[^>]*>").unwrap()
});

pub static BUTTON_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<button\s(?:[^>]*?\s)?class\s*=\s*["']([^"']+)["'][^>]*>"#).unwrap()
});

pub static LINK_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s(?:[^>]*?\s)?class\s*=\s*["']([^"']+)["'][^>]*>"#).unwrap()
});

pub static LIST_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<ul\s(?:[^>]*?\s)?class\s*=\s*["']([^"']+)["'][^>]*>"#).unwrap()
});

pub static ICON_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<i\s(?:[^>]*?\s)?class\s*=\s*["']([^"']*ico-[^"']*)["'][^>]*>"#).unwrap()
});

/// Any opening tag; group 1 is the tag name
pub static OPENING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*>").unwrap());

/// Quoted class attribute; group 1 is the attribute, 2 the quote, 3 the value
pub static QUOTED_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(class\s*=\s*(["'])([^"']*)["'])"#).unwrap()
});

/// A class attribute in any form
pub static CLASS_ASSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\sclass\s*=").unwrap());
