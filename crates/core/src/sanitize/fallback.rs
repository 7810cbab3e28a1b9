//! Pattern-based sanitizer for builds without a DOM parser.

use regex::Regex;
use std::sync::LazyLock;

use super::{HtmlSanitizer, strip_doctype};

static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<head\b[^>]*>.*?</head\s*>").expect("HEAD_RE: hardcoded regex is valid"));

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>.*?</title\s*>").expect("TITLE_RE: hardcoded regex is valid"));

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("SCRIPT_RE: hardcoded regex is valid")
});

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("STYLE_RE: hardcoded regex is valid"));

// Unterminated script/style: drop everything to the end of input.
static OPEN_RAWTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(?:script|style)\b.*$").expect("OPEN_RAWTEXT_RE: hardcoded regex is valid"));

static VOID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:meta|link)\b[^>]*>").expect("VOID_RE: hardcoded regex is valid"));

static WRAPPER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:html|head|body|title|script|style)\b[^>]*>").expect("WRAPPER_RE: hardcoded regex is valid")
});

/// Regex sanitizer.
///
/// Removes `head`, `title`, `script` and `style` elements with their
/// contents, drops `meta`/`link` tags, and unwraps `html`/`body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexSanitizer;

impl HtmlSanitizer for RegexSanitizer {
    fn sanitize(&self, raw_html: &str) -> String {
        let html = strip_doctype(raw_html);

        let html = HEAD_RE.replace_all(&html, "");
        let html = TITLE_RE.replace_all(&html, "");
        let html = SCRIPT_RE.replace_all(&html, "");
        let html = STYLE_RE.replace_all(&html, "");
        let html = OPEN_RAWTEXT_RE.replace_all(&html, "");
        let html = VOID_RE.replace_all(&html, "");
        let html = WRAPPER_RE.replace_all(&html, "");

        html.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(html: &str) -> String {
        RegexSanitizer.sanitize(html)
    }

    #[test]
    fn test_unwraps_full_document() {
        let html = r#"
            <!DOCTYPE html>
            <html lang="en">
            <head>
                <meta charset="utf-8">
                <title>Colombo Update</title>
                <link rel="stylesheet" href="/x.css">
            </head>
            <body class="article">
                <h2>Colombo</h2>
                <p>Rain expected.</p>
            </body>
            </html>
        "#;

        let out = sanitize(html);
        assert!(out.starts_with("<h2>Colombo</h2>"));
        assert!(out.ends_with("<p>Rain expected.</p>"));
        assert!(!out.contains("Colombo Update"));
        assert!(!out.to_lowercase().contains("<meta"));
        assert!(!out.to_lowercase().contains("<body"));
    }

    #[test]
    fn test_removes_script_and_style_bodies() {
        let out = sanitize("<p>a</p><script>alert('x')</script><style>p{color:red}</style><p>b</p>");
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_removes_uppercase_script() {
        let out = sanitize("<P>a</P><SCRIPT type=\"text/javascript\">\nsteal()\n</SCRIPT>");
        assert_eq!(out, "<P>a</P>");
    }

    #[test]
    fn test_unterminated_script_is_dropped() {
        let out = sanitize("<p>a</p><script>never closed");
        assert_eq!(out, "<p>a</p>");
    }

    #[test]
    fn test_meta_and_link_in_body() {
        let out = sanitize("<meta name=\"x\" content=\"y\"/><p>a</p><link rel=\"icon\">");
        assert_eq!(out, "<p>a</p>");
    }

    #[test]
    fn test_fragment_untouched() {
        let fragment = "<h2>Title</h2><p>Text with <a href=\"https://a.lk\">link</a>.</p>";
        assert_eq!(sanitize(fragment), fragment);
    }

    #[test]
    fn test_does_not_match_tag_prefixes() {
        let fragment = "<header><p>top</p></header><bodyguard>x</bodyguard>";
        assert_eq!(sanitize(fragment), fragment);
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("<html><body><p>X</p><script>x</script></body></html>");
        assert_eq!(sanitize(&once), once);
    }
}
