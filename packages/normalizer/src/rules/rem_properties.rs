use crate::patterns::{
    HEX_COLOR_RE, KEYWORD_VALUE_RE, NUMERIC_TOKEN_RE, RELATIVE_UNIT_RE, VARIABLE_RE,
    VIEWPORT_UNIT_RE,
};
use crate::rules::RewriteRule;
use regex::{Captures, Regex};
use std::borrow::Cow;
use tracing::warn;

/// Rewrites numeric sizing declarations to the rem mixin
///
/// `margin: 20px;` → `@include rem(margin, 20);`. Values that the mixin
/// cannot express are left alone, see [`skip_reason`].
pub struct RemPropertiesRule {
    pattern: Option<Regex>,
}

impl RemPropertiesRule {
    /// Build the declaration matcher for an allow-list of properties
    pub fn new<S: AsRef<str>>(properties: &[S]) -> Self {
        let mut names: Vec<&str> = properties
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            warn!("No rem properties configured, rem conversion disabled");
            return Self { pattern: None };
        }

        // Longest first so `margin-top` is tried before `margin`
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        names.dedup();
        let alternation: Vec<String> = names.iter().map(|name| regex::escape(name)).collect();
        let source = format!(r"(\s+)({})\s*:\s*([^;{{}}]+);", alternation.join("|"));

        match Regex::new(&source) {
            Ok(pattern) => Self { pattern: Some(pattern) },
            Err(err) => {
                warn!(error = %err, "Invalid rem property list, rem conversion disabled");
                Self { pattern: None }
            }
        }
    }
}

impl RewriteRule for RemPropertiesRule {
    fn name(&self) -> &'static str {
        "rem-properties"
    }

    fn description(&self) -> &'static str {
        "Convert numeric sizing properties to the rem mixin"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };

        pattern.replace_all(text, |caps: &Captures| {
            let value = &caps[3];
            if skip_reason(value).is_some() {
                return caps[0].to_string();
            }
            match numeric_value(value.trim()) {
                Some(value) => format!("{}@include rem({}, {});", &caps[1], &caps[2], value),
                None => caps[0].to_string(),
            }
        })
    }
}

/// Why a declaration value must stay as written, if it must
///
/// Keyword, percentage and unit checks ignore `$variable` references and hex
/// literals. The color pass later swaps one for the other, and a variable
/// name like `$gap-2em` is not a unit.
pub fn skip_reason(value: &str) -> Option<&'static str> {
    if value.contains("rem(") {
        return Some("mixin");
    }
    if value.contains("calc(") {
        return Some("calc");
    }

    let without_variables = VARIABLE_RE.replace_all(value, "");
    let bare = HEX_COLOR_RE.replace_all(&without_variables, "");
    if KEYWORD_VALUE_RE.is_match(bare.trim()) {
        Some("keyword")
    } else if bare.contains('%') {
        Some("percentage")
    } else if VIEWPORT_UNIT_RE.is_match(&bare) {
        Some("viewport-unit")
    } else if RELATIVE_UNIT_RE.is_match(&bare) {
        Some("relative-unit")
    } else {
        None
    }
}

/// Strip `px` from every numeric token
///
/// Non-numeric tokens are kept as written; at least one token has to be
/// numeric for the value to qualify.
pub fn numeric_value(value: &str) -> Option<String> {
    let mut any_numeric = false;
    let tokens: Vec<&str> = value
        .split_whitespace()
        .map(|token| match NUMERIC_TOKEN_RE.captures(token) {
            Some(caps) => {
                any_numeric = true;
                caps.get(1).map_or(token, |number| number.as_str())
            }
            None => token,
        })
        .collect();

    any_numeric.then(|| tokens.join(" "))
}
