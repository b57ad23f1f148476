use crate::diagnostic::Diagnostic;
use crate::rules::{over_limit_lines, RuleRegistry};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 4;

pub const DEFAULT_COLOR_FALLBACK: &str = "#cccccc";

/// Properties whose numeric values go through the rem mixin
pub const DEFAULT_REM_PROPERTIES: &[&str] = &[
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "width",
    "height",
    "max-width",
    "min-width",
    "max-height",
    "min-height",
    "top",
    "right",
    "bottom",
    "left",
    "font-size",
    "line-height",
    "border-width",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-radius",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "gap",
    "row-gap",
    "column-gap",
    "outline-width",
    "outline-offset",
    "text-indent",
    "letter-spacing",
    "word-spacing",
    "transform-origin",
    "perspective",
    "perspective-origin",
];

/// Options for the stylesheet pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScssOptions {
    /// Lines nested deeper than this are annotated
    pub max_nesting_depth: usize,
    pub rem_properties: Vec<String>,
    /// Hex used for color variables no table entry or hint recognizes
    pub color_fallback: String,
}

impl Default for ScssOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            rem_properties: DEFAULT_REM_PROPERTIES.iter().map(|name| name.to_string()).collect(),
            color_fallback: DEFAULT_COLOR_FALLBACK.to_string(),
        }
    }
}

/// Rewrite a generated stylesheet with the default options
pub fn normalize_scss(stylesheet: &str) -> String {
    normalize_scss_with(stylesheet, &ScssOptions::default())
}

/// Rewrite a generated stylesheet to the house style rules.
///
/// Empty input comes back unchanged.
#[instrument(skip_all, fields(len = stylesheet.len()))]
pub fn normalize_scss_with(stylesheet: &str, options: &ScssOptions) -> String {
    if stylesheet.is_empty() {
        return String::new();
    }
    let normalized = RuleRegistry::scss(options).apply(stylesheet);
    info!(changed = normalized != stylesheet, "SCSS normalization complete");
    normalized
}

/// Report every line nested deeper than `max_depth`
pub fn lint_nesting(stylesheet: &str, max_depth: usize) -> Vec<Diagnostic> {
    over_limit_lines(stylesheet, max_depth)
        .into_iter()
        .map(|(index, depth)| {
            Diagnostic::warning(
                "max-nesting-depth",
                format!("Nesting depth {} exceeds the limit of {}", depth, max_depth),
                index + 1,
            )
            .with_suggestion("Flatten the selector or extract a separate block")
        })
        .collect()
}
