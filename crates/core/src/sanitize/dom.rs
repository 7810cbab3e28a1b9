//! DOM-based sanitizer using scraper.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::{HtmlSanitizer, RegexSanitizer, strip_doctype};

static STRIP_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script, style, head, title, meta, link").expect("STRIP_SELECTOR: hardcoded selector is valid")
});

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("BODY_SELECTOR: hardcoded selector is valid"));

/// Sanitizer that parses the markup into a document tree.
///
/// The input is parsed as a full document, so fragments are wrapped in an
/// implied `<body>` and bare `<title>`/`<meta>` tags are hoisted into `<head>`
/// before being removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSanitizer;

impl HtmlSanitizer for DomSanitizer {
    fn sanitize(&self, raw_html: &str) -> String {
        let html = strip_doctype(raw_html);
        let mut document = Html::parse_document(&html);

        let doomed: Vec<_> = document.select(&STRIP_SELECTOR).map(|element| element.id()).collect();
        for id in doomed {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }

        let body = document
            .select(&BODY_SELECTOR)
            .next()
            .map(|body| body.inner_html().trim().to_string())
            .unwrap_or_default();

        if body.is_empty() {
            tracing::debug!("DOM sanitizer produced an empty body; using pattern-based output");
            return RegexSanitizer.sanitize(&html);
        }

        body
    }

    fn name(&self) -> &'static str {
        "dom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(html: &str) -> String {
        DomSanitizer.sanitize(html)
    }

    #[test]
    fn test_unwraps_full_document() {
        let out = sanitize("<html><head><title>T</title></head><body><p>X</p></body></html>");
        assert_eq!(out, "<p>X</p>");
    }

    #[test]
    fn test_removes_unsafe_elements_in_body() {
        let out = sanitize(
            r#"<body><h2>Kandy</h2><script>alert(1)</script><style>h2{}</style><link rel="x"><p>Hill country.</p></body>"#,
        );
        assert_eq!(out, "<h2>Kandy</h2><p>Hill country.</p>");
    }

    #[test]
    fn test_fragment_passes_through() {
        let fragment = r#"<h2>Ella</h2><p>The <a href="https://example.lk/ella">Nine Arch Bridge</a>.</p>"#;
        assert_eq!(sanitize(fragment), fragment);
    }

    #[test]
    fn test_doctype_removed() {
        let out = sanitize("<!DOCTYPE html>\n<p>Galle</p>");
        assert_eq!(out, "<p>Galle</p>");
    }

    #[test]
    fn test_empty_body_uses_fallback() {
        let out = sanitize("<title>only a title</title>");
        assert_eq!(out, "");

        let out = sanitize("<script>alert(1)</script>");
        assert_eq!(out, "");
    }

    #[test]
    fn test_idempotent() {
        let fragment = "<h2>Trains</h2><ul><li>Podi Menike</li><li>Udarata Menike</li></ul>";
        let once = sanitize(fragment);
        assert_eq!(sanitize(&once), once);
    }
}
