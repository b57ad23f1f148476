use crate::rules::RewriteRule;
use std::borrow::Cow;
use std::collections::HashSet;

/// Start of the inline comment marking an over-deep line
pub const NESTING_WARNING_PREFIX: &str = "/* WARNING - nesting deeper than";

/// Appends a warning comment to every line nested deeper than `max_depth`
///
/// Braces are counted per line and the net change is applied before the
/// check, so the line that opens the offending block is flagged. Braces in
/// comments and strings count too.
pub struct NestingDepthRule {
    max_depth: usize,
}

impl NestingDepthRule {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    fn annotation(&self) -> String {
        format!(" {} {} levels */", NESTING_WARNING_PREFIX, self.max_depth)
    }
}

impl RewriteRule for NestingDepthRule {
    fn name(&self) -> &'static str {
        "max-nesting-depth"
    }

    fn description(&self) -> &'static str {
        "Flag lines nested deeper than the configured limit"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let flagged: HashSet<usize> = over_limit_lines(text, self.max_depth)
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        let needs_annotation = text
            .split('\n')
            .enumerate()
            .any(|(index, line)| flagged.contains(&index) && !line.contains(NESTING_WARNING_PREFIX));
        if !needs_annotation {
            return Cow::Borrowed(text);
        }

        let annotation = self.annotation();
        let lines: Vec<String> = text
            .split('\n')
            .enumerate()
            .map(|(index, line)| {
                if !flagged.contains(&index) || line.contains(NESTING_WARNING_PREFIX) {
                    return line.to_string();
                }
                match line.strip_suffix('\r') {
                    Some(body) => format!("{}{}\r", body, annotation),
                    None => format!("{}{}", line, annotation),
                }
            })
            .collect();
        Cow::Owned(lines.join("\n"))
    }
}

/// `(line index, running depth)` for every line whose depth exceeds `max_depth`
pub fn over_limit_lines(text: &str, max_depth: usize) -> Vec<(usize, i64)> {
    let limit = i64::try_from(max_depth).unwrap_or(i64::MAX);
    let mut depth: i64 = 0;
    let mut flagged = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        depth += opens - closes;
        if depth > limit {
            flagged.push((index, depth));
        }
    }
    flagged
}
