//! Structural summary of generated markup, used to steer stylesheet generation.

use crate::patterns::*;
use handoff_analyzer::StyleInfo;
use handoff_normalizer::class_names_from_markup;
use regex::Regex;
use serde::Serialize;
use std::fmt::Write;

/// Colors listed before the rest are elided
const LISTED_COLORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractiveKind {
    Button,
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveElement {
    pub kind: InteractiveKind,
    pub classes: Vec<String>,
}

/// What a stylesheet has to cover for a piece of markup
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupSummary {
    /// First class of the first tag that has one
    pub wrapper_class: Option<String>,
    /// Every class token, sorted
    pub all_classes: Vec<String>,
    /// Semantic tags in document order, each listed once
    pub semantic_tags: Vec<String>,
    pub component_classes: Vec<String>,
    /// Buttons first, then links
    pub interactive_elements: Vec<InteractiveElement>,
    /// Class lists of every `<ul>` with a class
    pub list_structures: Vec<Vec<String>>,
    /// Class lists of every `ico-` icon
    pub icon_elements: Vec<Vec<String>>,
}

fn split_classes(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

fn class_lists(pattern: &Regex, markup: &str) -> Vec<Vec<String>> {
    pattern
        .captures_iter(markup)
        .map(|caps| split_classes(&caps[1]))
        .collect()
}

/// Summarize the structure of `markup`. Empty markup gives the empty summary.
pub fn summarize_markup(markup: &str) -> MarkupSummary {
    if markup.trim().is_empty() {
        return MarkupSummary::default();
    }

    let all_classes = class_names_from_markup(markup);

    let wrapper_class = FIRST_CLASSED_TAG_RE
        .captures(markup)
        .and_then(|caps| caps[2].split_whitespace().next().map(str::to_string));

    let mut semantic_tags: Vec<String> = Vec::new();
    for caps in SEMANTIC_TAG_RE.captures_iter(markup) {
        let tag = &caps[1];
        if !semantic_tags.iter().any(|seen| seen == tag) {
            semantic_tags.push(tag.to_string());
        }
    }

    let component_classes = all_classes
        .iter()
        .filter(|class| class.starts_with("component-"))
        .cloned()
        .collect();

    let buttons = class_lists(&BUTTON_CLASS_RE, markup)
        .into_iter()
        .map(|classes| InteractiveElement {
            kind: InteractiveKind::Button,
            classes,
        });
    let links = class_lists(&LINK_CLASS_RE, markup)
        .into_iter()
        .map(|classes| InteractiveElement {
            kind: InteractiveKind::Link,
            classes,
        });

    MarkupSummary {
        wrapper_class,
        all_classes,
        semantic_tags,
        component_classes,
        interactive_elements: buttons.chain(links).collect(),
        list_structures: class_lists(&LIST_CLASS_RE, markup),
        icon_elements: class_lists(&ICON_CLASS_RE, markup),
    }
}

impl MarkupSummary {
    /// Advisory text combining the markup summary with design style facts
    pub fn describe(&self, style: &StyleInfo) -> String {
        let mut out = String::new();

        if let Some(wrapper) = &self.wrapper_class {
            let _ = writeln!(out, "Wrapper class: .{}", wrapper);
        }
        if !self.semantic_tags.is_empty() {
            let _ = writeln!(out, "Semantic tags: {}", self.semantic_tags.join(", "));
        }
        if !self.component_classes.is_empty() {
            let _ = writeln!(out, "Component classes: {}", self.component_classes.join(", "));
        }
        if !self.interactive_elements.is_empty() {
            let _ = writeln!(
                out,
                "Interactive elements: {} (buttons, links)",
                self.interactive_elements.len()
            );
        }
        if !self.list_structures.is_empty() {
            let _ = writeln!(out, "List structures: {} ul/li", self.list_structures.len());
        }
        if !self.icon_elements.is_empty() {
            let _ = writeln!(out, "Icon elements: {}", self.icon_elements.len());
        }
        if !style.colors.is_empty() {
            let listed: Vec<&str> = style.colors.iter().take(LISTED_COLORS).map(String::as_str).collect();
            let more = if style.colors.len() > LISTED_COLORS { " and more" } else { "" };
            let _ = writeln!(out, "Design colors: {}{}", listed.join(", "), more);
        }
        if !style.fonts.is_empty() {
            let _ = writeln!(out, "Design fonts: {}", style.fonts.join(", "));
        }
        let _ = writeln!(out, "Total classes: {}", self.all_classes.len());

        out
    }
}
