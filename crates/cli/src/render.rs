//! Text and JSON rendering of results.

use ceylon_core::{GeneratedArticle, GroundingSource, NewsTopic};
use serde::Serialize;
use std::fmt::Write;

/// Pretty JSON for `--json` output.
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Numbered topic list followed by the batch sources.
pub fn topics(topics: &[NewsTopic]) -> String {
    if topics.is_empty() {
        return "No topics returned.".to_string();
    }

    let mut out = String::new();
    for (i, topic) in topics.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, topic.topic);
        if !topic.summary.is_empty() {
            let _ = writeln!(out, "    {}", topic.summary);
        }
    }

    // Every topic in a batch carries the same sources.
    if let Some(first) = topics.first() {
        sources(&mut out, &first.sources);
    }

    out.trim_end().to_string()
}

/// Article HTML, then keywords and sources.
pub fn article(article: &GeneratedArticle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", article.html);

    if !article.seo_keywords.is_empty() {
        let _ = writeln!(out, "\nSEO keywords: {}", article.seo_keywords.join(", "));
    }
    sources(&mut out, &article.sources);

    out.trim_end().to_string()
}

fn sources(out: &mut String, sources: &[GroundingSource]) {
    if sources.is_empty() {
        return;
    }

    let _ = writeln!(out, "\nSources:");
    for source in sources {
        let _ = writeln!(out, "  - {} <{}>", source.display_label(), source.uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(uri: &str, title: &str) -> GroundingSource {
        GroundingSource { uri: uri.into(), title: title.into() }
    }

    #[test]
    fn test_topics_text() {
        let sources = vec![source("https://www.newsfirst.lk/a", "")];
        let list = vec![
            NewsTopic { topic: "Fuel prices".into(), summary: "Revised today.".into(), sources: sources.clone() },
            NewsTopic { topic: "Cricket".into(), summary: String::new(), sources },
        ];

        let text = topics(&list);
        assert!(text.starts_with(" 1. Fuel prices\n    Revised today.\n 2. Cricket"));
        assert!(text.ends_with("Sources:\n  - newsfirst.lk <https://www.newsfirst.lk/a>"));
        assert_eq!(text.matches("Sources:").count(), 1);
    }

    #[test]
    fn test_topics_empty() {
        assert_eq!(topics(&[]), "No topics returned.");
    }

    #[test]
    fn test_article_text() {
        let article = GeneratedArticle {
            html: "<h1>Ella</h1>".into(),
            sources: vec![source("https://railway.gov.lk/", "Sri Lanka Railways")],
            seo_keywords: vec!["ella".into(), "train".into()],
        };

        assert_eq!(
            super::article(&article),
            "<h1>Ella</h1>\n\nSEO keywords: ella, train\n\nSources:\n  - Sri Lanka Railways <https://railway.gov.lk/>"
        );
    }

    #[test]
    fn test_article_without_extras() {
        let article = GeneratedArticle { html: "<p>x</p>".into(), sources: vec![], seo_keywords: vec![] };
        assert_eq!(super::article(&article), "<p>x</p>");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let article = GeneratedArticle { html: "<p>x</p>".into(), sources: vec![], seo_keywords: vec!["k".into()] };
        let value: serde_json::Value = serde_json::from_str(&json(&article).unwrap()).unwrap();
        assert_eq!(value["seoKeywords"][0], "k");
    }
}
