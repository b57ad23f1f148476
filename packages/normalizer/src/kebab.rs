use crate::patterns::{CAMEL_BOUNDARY_RE, HYPHEN_RUN_RE, SEPARATOR_RUN_RE};

/// Convert an identifier to kebab-case.
///
/// `mainContainer`, `main_container` and `Main Container` all become
/// `main-container`. Applying the conversion twice gives the same result.
pub fn to_kebab_case(token: &str) -> String {
    let spaced = CAMEL_BOUNDARY_RE.replace_all(token, "$1-$2");
    let hyphenated = SEPARATOR_RUN_RE.replace_all(&spaced, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    collapsed.to_lowercase().trim_matches('-').to_string()
}
