const FENCE: &str = "```";

/// Pull the code out of a model response.
///
/// Returns the body of the first fenced block, without the language hint
/// line, or the whole trimmed response when there is no complete fence.
pub fn extract_code_block(response: &str) -> String {
    let text = response.trim();

    if let Some(open) = text.find(FENCE) {
        let after_fence = open + FENCE.len();
        let body_start = text[after_fence..]
            .find('\n')
            .map_or(after_fence, |newline| after_fence + newline + 1);
        if let Some(close) = text[body_start..].find(FENCE) {
            return text[body_start..body_start + close].trim().to_string();
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_with_language() {
        let response = "Here you go:\n```html\n<div class=\"a\"></div>\n```\nEnjoy!";
        assert_eq!(extract_code_block(response), "<div class=\"a\"></div>");
    }

    #[test]
    fn test_first_block_wins() {
        let response = "```scss\n.a {}\n```\n```scss\n.b {}\n```";
        assert_eq!(extract_code_block(response), ".a {}");
    }

    #[test]
    fn test_plain_response() {
        assert_eq!(extract_code_block("  <p>hi</p>\n"), "<p>hi</p>");
        assert_eq!(extract_code_block(""), "");
    }

    #[test]
    fn test_unclosed_fence_returns_text() {
        assert_eq!(extract_code_block("```html\n<p>cut off"), "```html\n<p>cut off");
    }
}
