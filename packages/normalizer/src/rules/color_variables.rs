use crate::patterns::VARIABLE_RE;
use crate::rules::RewriteRule;
use regex::Captures;
use std::borrow::Cow;

const PRIMARY: &str = "#3b82f6";
const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";
const GRAY: &str = "#6b7280";
const RED: &str = "#ef4444";
const GREEN: &str = "#10b981";

/// Exact variable names, matched case-insensitively without the `$`
const COLOR_TABLE: &[(&str, &str)] = &[
    ("primary", PRIMARY),
    ("primary-bg", PRIMARY),
    ("color-primary", PRIMARY),
    ("white", WHITE),
    ("color-white", WHITE),
    ("color-fff", WHITE),
    ("black", BLACK),
    ("color-black", BLACK),
    ("color-000", BLACK),
    ("gray", GRAY),
    ("grey", GRAY),
    ("color-gray", GRAY),
    ("color-grey", GRAY),
    ("light-gray", "#f3f4f6"),
    ("light-grey", "#f3f4f6"),
    ("dark-gray", "#374151"),
    ("dark-grey", "#374151"),
    ("red", RED),
    ("color-red", RED),
    ("green", GREEN),
    ("color-green", GREEN),
    ("blue", PRIMARY),
    ("color-blue", PRIMARY),
    ("yellow", "#f59e0b"),
    ("color-yellow", "#f59e0b"),
    ("orange", "#f97316"),
    ("color-orange", "#f97316"),
    ("purple", "#8b5cf6"),
    ("color-purple", "#8b5cf6"),
    ("pink", "#ec4899"),
    ("color-pink", "#ec4899"),
    ("success", GREEN),
    ("error", RED),
    ("warning", "#f59e0b"),
    ("info", PRIMARY),
    ("danger", RED),
];

/// Substring fallbacks, first match wins
const COLOR_HINTS: &[(&[&str], &str)] = &[
    (&["white", "fff"], WHITE),
    (&["black", "000"], BLACK),
    (&["primary", "blue"], PRIMARY),
    (&["gray", "grey"], GRAY),
    (&["red", "danger"], RED),
    (&["green", "success"], GREEN),
];

/// Replaces `$variable` references with hex literals
pub struct ColorVariablesRule {
    fallback: String,
}

impl ColorVariablesRule {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }
}

impl RewriteRule for ColorVariablesRule {
    fn name(&self) -> &'static str {
        "color-variables"
    }

    fn description(&self) -> &'static str {
        "Inline color variables as hex literals"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        VARIABLE_RE.replace_all(text, |caps: &Captures| {
            resolve_color(&caps[0], &self.fallback).to_string()
        })
    }
}

/// Hex color for a `$variable`: table lookup, then name hints, then `fallback`
pub fn resolve_color<'a>(variable: &str, fallback: &'a str) -> &'a str {
    let name = variable.trim_start_matches('$').to_lowercase();

    if let Some((_, hex)) = COLOR_TABLE.iter().find(|(key, _)| *key == name) {
        return *hex;
    }
    COLOR_HINTS
        .iter()
        .find(|(hints, _)| hints.iter().any(|hint| name.contains(hint)))
        .map_or(fallback, |(_, hex)| *hex)
}
