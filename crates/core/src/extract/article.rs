//! Article extraction with key alias resolution.

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::parse_json_payload;
use crate::sanitize::HtmlSanitizer;
use crate::text::strip_code_fences;
use crate::{Error, GeneratedArticle, GroundingSource};

/// Accepted keys for the article HTML, in priority order.
const HTML_ALIASES: &[&str] = &["articleHtml", "article_html"];

/// Accepted keys for the SEO keyword list, in priority order.
const KEYWORD_ALIASES: &[&str] = &["seoKeywords", "seo_keywords"];

/// Article payload after alias resolution, before sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePayload {
    pub html: String,
    pub seo_keywords: Vec<String>,
}

impl ArticlePayload {
    /// Decode a parsed JSON value into a single normalized structure.
    pub fn decode(value: &Value) -> Result<Self, Error> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::InvalidFormat("expected a JSON object".into()))?;

        let html = first_alias(object, HTML_ALIASES)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidFormat("response is missing article content".into()))?
            .to_string();

        let seo_keywords = first_alias(object, KEYWORD_ALIASES)
            .map(normalize_keywords)
            .unwrap_or_default();

        Ok(Self { html, seo_keywords })
    }
}

fn first_alias<'a>(object: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| object.get(*key))
}

/// Keep string items only, trimmed, non-empty, first occurrence wins.
fn normalize_keywords(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| seen.insert(*keyword))
        .map(str::to_string)
        .collect()
}

/// Parse an article response, sanitize its HTML and attach sources.
///
/// The text is fence-stripped twice, since models sometimes nest a fenced
/// payload inside another fence.
///
/// # Errors
///
/// - `EmptyContent` when the payload is blank or the HTML is empty after
///   sanitization
/// - `Parse` when the payload is not JSON
/// - `InvalidFormat` when it is not an object or has no HTML field
pub fn extract_article(
    raw: &str, sources: &[GroundingSource], sanitizer: &dyn HtmlSanitizer,
) -> Result<GeneratedArticle, Error> {
    let unwrapped = strip_code_fences(&strip_code_fences(raw));
    let value = parse_json_payload(&unwrapped, "response")?;
    let payload = ArticlePayload::decode(&value)?;

    let html = sanitizer.sanitize(&payload.html);
    if html.is_empty() {
        return Err(Error::EmptyContent("article".into()));
    }

    tracing::debug!(
        sanitizer = sanitizer.name(),
        html_len = html.len(),
        keywords = payload.seo_keywords.len(),
        "extracted article"
    );

    Ok(GeneratedArticle { html, sources: sources.to_vec(), seo_keywords: payload.seo_keywords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::RegexSanitizer;
    use serde_json::json;

    fn extract(raw: &str) -> Result<GeneratedArticle, Error> {
        extract_article(raw, &[], &RegexSanitizer)
    }

    #[test]
    fn test_camel_case_keys() {
        let article = extract(r#"{"articleHtml":"<p>x</p>","seoKeywords":["a","b","a"]}"#).unwrap();
        assert_eq!(article.html, "<p>x</p>");
        assert_eq!(article.seo_keywords, vec!["a", "b"]);
    }

    #[test]
    fn test_snake_case_keys() {
        let article = extract(r#"{"article_html":"<p>x</p>","seo_keywords":["a","b"]}"#).unwrap();
        assert_eq!(article.html, "<p>x</p>");
        assert_eq!(article.seo_keywords, vec!["a", "b"]);
    }

    #[test]
    fn test_camel_case_wins_when_both_present() {
        let payload = ArticlePayload::decode(&json!({
            "article_html": "<p>snake</p>",
            "articleHtml": "<p>camel</p>",
            "seo_keywords": ["snake"],
            "seoKeywords": ["camel"]
        }))
        .unwrap();
        assert_eq!(payload.html, "<p>camel</p>");
        assert_eq!(payload.seo_keywords, vec!["camel"]);
    }

    #[test]
    fn test_keywords_normalized() {
        let payload = ArticlePayload::decode(&json!({
            "articleHtml": "<p>x</p>",
            "seoKeywords": ["  trains ", "", "Trains", 7, null, "trains", "   "]
        }))
        .unwrap();
        assert_eq!(payload.seo_keywords, vec!["trains", "Trains"]);
    }

    #[test]
    fn test_keywords_not_an_array() {
        let payload = ArticlePayload::decode(&json!({"articleHtml": "<p>x</p>", "seoKeywords": "a, b"})).unwrap();
        assert!(payload.seo_keywords.is_empty());

        let payload = ArticlePayload::decode(&json!({"articleHtml": "<p>x</p>"})).unwrap();
        assert!(payload.seo_keywords.is_empty());
    }

    #[test]
    fn test_missing_html_is_shape_error() {
        let err = extract(r#"{"seoKeywords":["a"]}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));

        let err = extract(r#"{"articleHtml": 12}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_non_object_is_shape_error() {
        assert!(matches!(extract(r#"["<p>x</p>"]"#), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(extract("<p>plain html, not json</p>"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_empty_after_sanitization() {
        let err = extract(r#"{"articleHtml": "<html><head><title>T</title></head><body>  </body></html>"}"#).unwrap_err();
        assert!(matches!(err, Error::EmptyContent(ref what) if what == "article"));
    }

    #[test]
    fn test_html_is_sanitized() {
        let raw = r#"{"articleHtml": "<!DOCTYPE html><html><body><h2>Ella</h2><script>x()</script></body></html>"}"#;
        let article = extract(raw).unwrap();
        assert_eq!(article.html, "<h2>Ella</h2>");
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"articleHtml\": \"<p>x</p>\", \"seoKeywords\": [\"k\"]}\n```";
        let article = extract(raw).unwrap();
        assert_eq!(article.html, "<p>x</p>");
        assert_eq!(article.seo_keywords, vec!["k"]);
    }

    #[test]
    fn test_sources_attached() {
        let sources = vec![GroundingSource { uri: "http://a".into(), title: "A".into() }];
        let article = extract_article(r#"{"articleHtml":"<p>x</p>"}"#, &sources, &RegexSanitizer).unwrap();
        assert_eq!(article.sources, sources);
    }
}
