use crate::types::{AnalysisResult, SemanticTag};
use std::fmt::Write;

/// Message used when there is nothing to recommend
pub const EMPTY_RECOMMENDATION: &str = "No selection to analyze.\n";

/// Render the advisory summary for an analysis.
///
/// Only the presence/count checks matter; wording is free to change.
pub fn format_recommendation(result: &AnalysisResult) -> String {
    if result.is_empty() {
        return EMPTY_RECOMMENDATION.to_string();
    }

    let mut out = String::from("Recommended HTML structure:\n");

    if result.has_semantic_tag(SemanticTag::Header) {
        out.push_str("- Use <header> for the top area\n");
    }
    if result.has_semantic_tag(SemanticTag::Nav) {
        out.push_str("- Use <nav> for navigation\n");
    }
    if result.has_semantic_tag(SemanticTag::Main) {
        out.push_str("- Use <main> for the primary content\n");
    } else {
        out.push_str("- Use <section> for content sections\n");
    }

    let titles: Vec<&str> = result
        .text_elements
        .iter()
        .filter(|text| text.is_title)
        .map(|text| text.recommended_tag.as_str())
        .collect();
    if !titles.is_empty() {
        let _ = writeln!(out, "- Heading elements: {}", titles.join(", "));
    }

    if !result.list_structures.is_empty() {
        let _ = writeln!(
            out,
            "- List structures: {} ul/li group(s)",
            result.list_structures.len()
        );
    }

    let components = result.unique_components();
    if !components.is_empty() {
        let names: Vec<&str> = components.iter().map(|kind| kind.class_name()).collect();
        let _ = writeln!(out, "- Components: {}", names.join(", "));
    }

    if !result.image_elements.is_empty() {
        let _ = writeln!(
            out,
            "- Images: {} figure/img block(s)",
            result.image_elements.len()
        );
    }

    if result.has_semantic_tag(SemanticTag::Footer) {
        out.push_str("- Use <footer> for the bottom area\n");
    }

    out
}
