//! Prompt text for the markup and stylesheet generation rounds.
//!
//! Every prompt is the trimmed user request, a fixed guideline block, the
//! analysis for the selection, and the selection itself as JSON between
//! bracketed markers.

use crate::markup::summarize_markup;
use handoff_analyzer::{analyze_selection, extract_selection_style};
use handoff_scene::Selection;

const HTML_GUIDELINES: &[&str] = &[
    "You generate HTML that strictly follows the markup guidelines below, based on a design selection exported as JSON.",
    "Return plain HTML only. No code fences, no markdown, no explanations.",
];

const HTML_RULES: &[&str] = &[
    "== Markup guidelines ==",
    "",
    "1. Semantic tags:",
    "   - <header> for page or section headers",
    "   - <nav> for navigation menus",
    "   - <main> for the primary content (only one)",
    "   - <section> for self-contained sections",
    "   - <article> for independent content",
    "   - <aside> for sidebars",
    "   - <footer> for footers",
    "",
    "2. Class names are kebab-case:",
    "   - main-container, benefit-item, content-section",
    "",
    "3. Headings are hierarchical:",
    "   - h1 for the single top-level title",
    "   - h2 to h6 in order below it",
    "",
    "4. Repeated items use <ul><li>.",
    "",
    "5. Links and buttons:",
    "   - links: <a href=\"\">",
    "   - buttons: <button type=\"button\">",
    "",
    "6. Icons:",
    "   - <i class=\"ico-name ico-normal\" aria-hidden=\"true\"></i>",
];

const HTML_ACCESSIBILITY: &[&str] = &[
    "8. Accessibility:",
    "   - aria-label, aria-hidden and role attributes where they apply",
    "   - structure comments such as <!-- section name -->",
];

const CLASS_LIST_RULES: &[&str] = &[
    "You generate HTML that strictly follows the markup guidelines below, based on a design selection exported as JSON.",
    "Return plain HTML only. No code fences, no markdown, no explanations.",
    "Only use classes from CLASS_LIST below in class attributes. Do not invent new class names.",
    "",
    "== Markup guidelines ==",
    "",
    "1. Prefer semantic tags: header, nav, main, section, article, aside, footer.",
    "   - Use the first class as the top-level wrapper, on a fitting semantic tag.",
    "",
    "2. Class names:",
    "   - Only the provided CLASS_LIST",
    "   - Classes prefixed with component- mark components; structure them as such",
    "",
    "3. Structure:",
    "   - repeated items: <ul>, <li>",
    "   - text: hierarchical h1-h6 or p",
    "   - actions: <button type=\"button\"> or <a href=\"\">",
    "   - images: <figure>, <img>",
    "",
    "4. Icons:",
    "   - <i class=\"ico-name ico-normal\" aria-hidden=\"true\"></i>",
    "   - meaningful icons also get role=\"img\" aria-label=\"description\"",
    "",
    "5. Accessibility:",
    "   - appropriate ARIA attributes",
    "   - structure comments between sections",
];

const SCSS_RULES: &[&str] = &[
    "You generate SCSS that strictly follows the stylesheet guidelines below, based on a design selection exported as JSON.",
    "Return plain SCSS only. No code fences, no markdown, no explanations.",
    "",
    "== Stylesheet guidelines ==",
    "",
    "1. Numeric values go through the rem mixin:",
    "   - @include rem(margin, 20), @include rem(padding, 10 20 15)",
    "   - @include rem(font-size, 16), @include rem(border, 1 solid #333333)",
    "",
    "2. Colors are hex literals, not variables:",
    "   - background-color: #3b82f6, color: #ffffff, border: 1px solid #cccccc",
    "",
    "3. Nest everything under one top-level wrapper class.",
    "",
    "4. Nest at most 4 levels deep.",
    "",
    "5. Use the selection data:",
    "   - colors for background-color, color and border-color",
    "   - sizes for width, height, padding and margin",
    "   - fonts for font-family, font-size and font-weight",
    "",
    "6. Nest component- classes and their parts inside the component.",
];

const SCSS_FROM_MARKUP_RULES: &[&str] = &[
    "You generate SCSS for the HTML below that strictly follows the stylesheet guidelines, using the design selection JSON for values.",
    "Return plain SCSS only. No code fences, no markdown, no explanations.",
    "",
    "== Stylesheet guidelines ==",
    "",
    "1. Numeric values go through the rem mixin:",
    "   wrong:",
    "      width: rem(24px);",
    "      margin: 20px;",
    "      padding: 10px 20px;",
    "   right:",
    "      @include rem(width, 24);",
    "      @include rem(margin, 20);",
    "      @include rem(padding, 10 20);",
    "   - drop px and pass bare numbers",
    "   - calc() expressions are the only exception: top: calc(50% - 10px)",
    "",
    "2. Colors are hex literals, not variables:",
    "   wrong: color: $color-primary;",
    "   right: color: #3b82f6;",
    "",
    "3. Nest everything under the wrapper class of the HTML.",
    "",
    "4. Nest at most 4 levels deep.",
    "",
    "Cover every class used in the HTML.",
];

fn header(user_prompt: &str) -> String {
    match user_prompt.trim() {
        "" => String::new(),
        prompt => format!("{}\n\n", prompt),
    }
}

fn selection_block(selection: &Selection) -> String {
    format!("[SELECTION_JSON]\n{}\n[/SELECTION_JSON]", selection.to_json_pretty())
}

/// Markup prompt carrying the structural analysis of `selection`
pub fn html_prompt(selection: &Selection, user_prompt: &str) -> String {
    let analysis = analyze_selection(selection);

    let components = analysis.unique_components();
    let component_line = if components.is_empty() {
        "   - use component- classes where they fit".to_string()
    } else {
        let names: Vec<&str> = components.iter().map(|kind| kind.class_name()).collect();
        format!("   - detected components: {}", names.join(", "))
    };

    let mut lines: Vec<String> = HTML_GUIDELINES.iter().map(|line| line.to_string()).collect();
    lines.push(String::new());
    lines.push("== Structure analysis ==".to_string());
    lines.push(analysis.recommended_structure.trim_end().to_string());
    lines.push(String::new());
    lines.extend(HTML_RULES.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push("7. Components:".to_string());
    lines.push(component_line);
    lines.push(String::new());
    lines.extend(HTML_ACCESSIBILITY.iter().map(|line| line.to_string()));

    format!("{}{}\n\n{}", header(user_prompt), lines.join("\n"), selection_block(selection))
}

/// Markup prompt restricted to the classes of an earlier stylesheet
pub fn html_prompt_with_classes(selection: &Selection, user_prompt: &str, classes: &[String]) -> String {
    format!(
        "{}{}\n\n[CLASS_LIST]\n{}\n[/CLASS_LIST]\n\n{}",
        header(user_prompt),
        CLASS_LIST_RULES.join("\n"),
        classes.join(", "),
        selection_block(selection)
    )
}

/// Stylesheet prompt built from the selection alone
pub fn scss_prompt(selection: &Selection, user_prompt: &str) -> String {
    format!("{}{}\n\n{}", header(user_prompt), SCSS_RULES.join("\n"), selection_block(selection))
}

/// Stylesheet prompt for markup generated from `selection`
pub fn scss_prompt_from_markup(markup: &str, selection: &Selection, user_prompt: &str) -> String {
    let summary = summarize_markup(markup);
    let style = extract_selection_style(selection);

    format!(
        "{}{}\n\n== Markup analysis ==\n{}\n[HTML_CODE]\n{}\n[/HTML_CODE]\n\n{}",
        header(user_prompt),
        SCSS_FROM_MARKUP_RULES.join("\n"),
        summary.describe(&style),
        markup.trim(),
        selection_block(selection)
    )
}
