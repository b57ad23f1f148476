//! Attribute scanning over the text between a tag name and its `>`

use crate::patterns::ATTRIBUTE_RE;
use std::ops::Range;

/// One attribute as written in a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// `None` for a bare attribute such as `disabled`
    pub value: Option<&'a str>,
    /// Byte range of the whole `name="value"` text
    pub span: Range<usize>,
}

/// Attributes in source order; quoted values are consumed whole, so text
/// inside them is never read as a name
pub fn attributes(attrs: &str) -> Vec<Attribute<'_>> {
    ATTRIBUTE_RE
        .captures_iter(attrs)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4)).map(|m| m.as_str());
            Some(Attribute { name, value, span: whole.range() })
        })
        .collect()
}

/// First attribute named `name`, compared case-insensitively
pub fn find_attribute<'a>(attrs: &'a str, name: &str) -> Option<Attribute<'a>> {
    attributes(attrs)
        .into_iter()
        .find(|attribute| attribute.name.eq_ignore_ascii_case(name))
}
