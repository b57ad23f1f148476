//! Deterministic rewriting of generated markup and stylesheets.
//!
//! Both pipelines are ordered lists of [`RewriteRule`]s held by a
//! [`RuleRegistry`]. Every rule is guarded so that normalizing already
//! normalized text changes nothing.
//!
//! ```
//! use handoff_normalizer::{class_names_from_markup, normalize_html, normalize_scss};
//!
//! let html = normalize_html(r#"<div class="mainContainer"><a href="/x">Go</a></div>"#);
//! assert_eq!(html, r#"<div class="main-container"><a href="">Go</a></div>"#);
//! assert_eq!(class_names_from_markup(&html), vec!["main-container"]);
//!
//! assert_eq!(normalize_scss(".a {\n  margin: 20px;\n}"), ".a {\n  @include rem(margin, 20);\n}");
//! ```

mod attributes;
mod classes;
mod diagnostic;
mod html;
mod kebab;
mod patterns;
pub mod rules;
mod scss;

pub use classes::{class_names_from_markup, class_names_from_stylesheet};
pub use diagnostic::Diagnostic;
pub use html::normalize_html;
pub use kebab::to_kebab_case;
pub use rules::{RewriteRule, RuleRegistry};
pub use scss::{
    lint_nesting, normalize_scss, normalize_scss_with, ScssOptions, DEFAULT_COLOR_FALLBACK,
    DEFAULT_MAX_NESTING_DEPTH, DEFAULT_REM_PROPERTIES,
};
