//! Cached regex patterns shared by the rewrite rules.
//!
//! Patterns are compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

// === Markup ===

/// ` class="..."` or ` class='...'` with a non-empty value; group 1 is the
/// leading whitespace, group 2 the value
pub static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)class\s*=\s*["']([^"']+)["']"#).unwrap()
});

/// One `name`, `name="value"`, `name='value'` or `name=value` attribute
pub static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>=`]+)))?"#).unwrap()
});

/// `<a ... href="...">`; group 1 is everything before `href`, group 2 the value
pub static ANCHOR_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+((?:[^>]*?\s)?)href\s*=\s*["']([^"']*)["']"#).unwrap()
});

/// Opening `<i ...>` tag with attributes in group 1
pub static ICON_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<i(\s[^>]*)>").unwrap());

/// Opening `<button>` tag with optional attributes in group 1
pub static BUTTON_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<button(\s[^>]*)?>").unwrap());

/// One `<div>` whose class mentions `item`, up to the first `</div>`
pub static ITEM_DIV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div\b[^>]*class\s*=\s*["'][^"']*item[^"']*["'][^>]*>[\s\S]*?</div>"#).unwrap()
});

/// Opening or closing level-1 heading; group 1 is `/` for closing tags
pub static H1_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)h1(\s[^>]*)?>").unwrap());

// === Class names ===

pub static CAMEL_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

pub static SEPARATOR_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\s]+").unwrap());

pub static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// `.identifier` class selectors
pub static CLASS_SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([a-zA-Z][a-zA-Z0-9_-]*)\b").unwrap());

// === Stylesheet ===

/// `property: rem(value);`
pub static REM_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s+)([a-zA-Z-]+)\s*:\s*rem\(([^)]+)\)\s*;").unwrap()
});

/// Values that must stay as written
pub static KEYWORD_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(auto|inherit|initial|unset|none|normal|baseline|center|flex-start|flex-end|space-between|space-around|space-evenly|stretch|start|end|left|right|top|bottom|middle|text-top|text-bottom|sub|super|0)$",
    )
    .unwrap()
});

pub static VIEWPORT_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d(vw|vh|vmin|vmax)").unwrap());

pub static RELATIVE_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d(em|rem)").unwrap());

/// A number with an optional `px` suffix; group 1 is the number
pub static NUMERIC_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(-?(?:\d+(?:\.\d+)?|\.\d+))(?:px)?$").unwrap()
});

/// `border` and `border-{side}` declarations
pub static BORDER_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s+)(border(?:-(?:top|right|bottom|left))?)\s*:\s*([^;{}]+);").unwrap()
});

/// `<width> <style> <color>` border shorthand
pub static BORDER_SHORTHAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d+(?:\.\d+)?)(?:px)?\s+(solid|dashed|dotted|double|groove|ridge|inset|outset)\s+(#[0-9a-f]{3,8}|\$[a-z][a-z0-9_-]*|[a-z]+|rgba?\([^)]+\))$",
    )
    .unwrap()
});

/// A bare border width
pub static BORDER_WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+(?:\.\d+)?)(?:px)?$").unwrap());

/// `box-shadow` and `text-shadow` declarations
pub static SHADOW_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s+)(box-shadow|text-shadow)\s*:\s*([^;{}]+);").unwrap()
});

/// Four lengths followed by a color
pub static SHADOW4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(-?\d+(?:\.\d+)?)(?:px)?\s+(-?\d+(?:\.\d+)?)(?:px)?\s+(-?\d+(?:\.\d+)?)(?:px)?\s+(-?\d+(?:\.\d+)?)(?:px)?\s+(.+)$",
    )
    .unwrap()
});

/// Three lengths followed by a color
pub static SHADOW3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(-?\d+(?:\.\d+)?)(?:px)?\s+(-?\d+(?:\.\d+)?)(?:px)?\s+(-?\d+(?:\.\d+)?)(?:px)?\s+(.+)$",
    )
    .unwrap()
});

/// `$variable` references
pub static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[a-zA-Z][a-zA-Z0-9_-]*").unwrap());

/// Hex color literals, the form `$variable` references are rewritten to
pub static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").unwrap());
