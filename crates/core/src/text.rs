//! Markdown fence stripping for raw model output.
//!
//! Models frequently wrap JSON or HTML payloads in fenced code blocks. Only
//! the first fenced block is considered, and its tag (`json`, `html` or
//! none) does not constrain what the content is.

use regex::Regex;
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?i:json|html)?(.*?)```").expect("FENCE_RE: hardcoded regex is valid"));

/// Return the trimmed contents of the first fenced block, or the trimmed
/// input when there is none.
pub fn strip_code_fences(text: &str) -> String {
    match FENCE_RE.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fence() {
        let input = "```json\n{\"trends\": []}\n```";
        assert_eq!(strip_code_fences(input), "{\"trends\": []}");
    }

    #[test]
    fn test_html_fence() {
        let input = "Here you go:\n```html\n<p>Hello</p>\n```\nEnjoy!";
        assert_eq!(strip_code_fences(input), "<p>Hello</p>");
    }

    #[test]
    fn test_bare_fence() {
        assert_eq!(strip_code_fences("```\n  payload  \n```"), "payload");
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        assert_eq!(strip_code_fences("```JSON\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```Html\n<b>x</b>\n```"), "<b>x</b>");
    }

    #[test]
    fn test_no_fence_trims() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_code_fences(""), "");
        assert_eq!(strip_code_fences("   \n\t"), "");
    }

    #[test]
    fn test_first_block_only() {
        let input = "```json\n{\"first\": true}\n```\ntext\n```json\n{\"second\": true}\n```";
        assert_eq!(strip_code_fences(input), "{\"first\": true}");
    }

    #[test]
    fn test_unterminated_fence_is_left_alone() {
        let input = "```json\n{\"a\": 1}";
        assert_eq!(strip_code_fences(input), input);
    }

    #[test]
    fn test_other_tag_is_kept_in_content() {
        assert_eq!(strip_code_fences("```xml\n<a/>\n```"), "xml\n<a/>");
    }

    #[test]
    fn test_idempotent_on_unfenced_output() {
        let once = strip_code_fences("```json\n{\"a\": 1}\n```");
        assert_eq!(strip_code_fences(&once), once);
    }
}
