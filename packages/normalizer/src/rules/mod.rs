mod anchor_href;
mod border_shorthand;
mod button_type;
mod class_names;
mod color_variables;
mod icon_aria_hidden;
mod icon_classes;
mod item_lists;
mod nesting_depth;
mod rem_function;
mod rem_properties;
mod shadows;
mod single_h1;

pub use anchor_href::AnchorHrefRule;
pub use border_shorthand::{border_value, BorderShorthandRule};
pub use button_type::ButtonTypeRule;
pub use class_names::ClassNamesRule;
pub use color_variables::{resolve_color, ColorVariablesRule};
pub use icon_aria_hidden::IconAriaHiddenRule;
pub use icon_classes::{icon_name, IconClassesRule};
pub use item_lists::ItemListsRule;
pub use nesting_depth::{over_limit_lines, NestingDepthRule, NESTING_WARNING_PREFIX};
pub use rem_function::RemFunctionRule;
pub use rem_properties::{numeric_value, skip_reason, RemPropertiesRule};
pub use shadows::{shadow_value, ShadowsRule};
pub use single_h1::SingleH1Rule;

use crate::scss::ScssOptions;
use std::borrow::Cow;
use tracing::debug;

/// A named, guarded text rewrite
///
/// A rule must leave its own output unchanged when applied a second time.
pub trait RewriteRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Rewrite `text`, borrowing it back when nothing matched
    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Ordered list of rewrite rules applied left to right
pub struct RuleRegistry {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl RuleRegistry {
    /// The markup pipeline, in application order
    pub fn html() -> Self {
        Self {
            rules: vec![
                Box::new(ClassNamesRule),
                Box::new(AnchorHrefRule),
                Box::new(IconClassesRule),
                Box::new(ButtonTypeRule),
                Box::new(IconAriaHiddenRule),
                Box::new(ItemListsRule),
                Box::new(SingleH1Rule),
            ],
        }
    }

    /// The stylesheet pipeline, in application order
    pub fn scss(options: &ScssOptions) -> Self {
        Self {
            rules: vec![
                Box::new(RemFunctionRule),
                Box::new(RemPropertiesRule::new(&options.rem_properties)),
                Box::new(BorderShorthandRule),
                Box::new(ShadowsRule),
                Box::new(ColorVariablesRule::new(&options.color_fallback)),
                Box::new(NestingDepthRule::new(options.max_nesting_depth)),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the pipeline
    pub fn add_rule(&mut self, rule: Box<dyn RewriteRule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn RewriteRule>] {
        &self.rules
    }

    /// Thread `text` through every rule in order
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(rewritten) = rule.rewrite(&current) {
                if rewritten != current {
                    debug!(rule = rule.name(), "Rule rewrote text");
                    current = rewritten;
                }
            }
        }
        current
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(|rule| rule.name()).collect();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    impl RewriteRule for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn description(&self) -> &'static str {
            "Uppercase everything"
        }

        fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
            if text.chars().any(|c| c.is_ascii_lowercase()) {
                Cow::Owned(text.to_ascii_uppercase())
            } else {
                Cow::Borrowed(text)
            }
        }
    }

    #[test]
    fn test_rule_names_are_unique() {
        for registry in [RuleRegistry::html(), RuleRegistry::scss(&ScssOptions::default())] {
            let mut names: Vec<&str> = registry.rules().iter().map(|rule| rule.name()).collect();
            let total = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn test_html_pipeline_order() {
        let names: Vec<&str> = RuleRegistry::html().rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "kebab-case-classes",
                "empty-anchor-href",
                "icon-classes",
                "button-type",
                "icon-aria-hidden",
                "item-lists",
                "single-h1",
            ]
        );
    }

    #[test]
    fn test_custom_rule() {
        let mut registry = RuleRegistry::empty();
        assert_eq!(registry.apply("hello"), "hello");

        registry.add_rule(Box::new(Shout));
        assert_eq!(registry.apply("hello"), "HELLO");
        assert_eq!(format!("{:?}", registry), "RuleRegistry { rules: [\"shout\"] }");
    }
}
