//! # Handoff Analyzer
//!
//! Reads a design selection and infers how it should be marked up:
//!
//! - **Semantic regions**: `header`, `nav`, `main`, `footer`, `aside` or
//!   `section` for every top-level node, from its name
//! - **Headings**: short or large texts become `h1`..`h6` by depth
//! - **Lists**: containers with more than two children of one node type
//! - **Components**: buttons, inputs, tabs and tables, by name
//! - **Images**: rectangles, ellipses and image-named nodes
//!
//! [`extract_style_info`] collects the colors, fonts, sizes and positions
//! used by the stylesheet prompt. Both walks are pure: the same tree always
//! yields the same result.
//!
//! ## Example
//!
//! ```rust
//! use handoff_analyzer::{analyze_json, SemanticTag};
//!
//! let json = r#"{"selection": [
//!     {"name": "header-wrap", "type": "FRAME", "children": [
//!         {"name": "Title", "type": "TEXT", "text": "Welcome", "fontSize": 32}
//!     ]}
//! ]}"#;
//!
//! let result = analyze_json(json);
//! assert_eq!(result.semantic_tags, vec![SemanticTag::Header]);
//! assert_eq!(result.text_elements[0].recommended_tag, "h2");
//! ```

pub mod analysis;
pub mod structure;
pub mod style_info;
pub mod types;

pub use analysis::{
    analyze, analyze_json, analyze_selection, heading_tag, is_image_candidate, is_repeating,
    is_title,
};
pub use structure::{format_recommendation, EMPTY_RECOMMENDATION};
pub use style_info::{
    extract_selection_style, extract_style_info, extract_style_json, rgb_to_hex, StyleInfo,
};
pub use types::{
    AnalysisResult, ButtonElement, ComponentKind, ImageElement, ListStructure, SemanticTag,
    TextElement,
};
