//! Prompt templates for the content services.
//!
//! All builders are pure: anything random (session tokens, themes) is passed
//! in by the caller. Topic strings are quote-escaped before interpolation so
//! they cannot break the JSON examples embedded in the instructions.

pub mod meta;
pub mod news;
pub mod railway;

pub use meta::{META_DESCRIPTION_MAX_LEN, build_meta_description};
pub use news::{NEWS_TOPIC_COUNT, manual_article_prompt, news_trends_prompt};
pub use railway::{RAILWAY_THEMES, RAILWAY_TOPIC_COUNT, railway_article_prompt, railway_topics_prompt};

/// Escape embedded double quotes (`"` becomes `\"`).
pub fn escape_quotes(input: &str) -> String {
    input.replace('"', "\\\"")
}

/// Shared output contract for article prompts.
const ARTICLE_JSON_CONTRACT: &str = r#"Respond with a single JSON object and nothing else, in exactly this shape:
{"articleHtml": "<h2>...</h2><p>...</p>", "seoKeywords": ["keyword one", "keyword two"]}
Rules for "articleHtml":
- An HTML fragment only: no <html>, <head>, <body>, <title>, <meta>, <script> or <style> tags.
- Use <h2>, <h3>, <p>, <ul>, <li>, <strong> and <a href="..."> where appropriate.
Rules for "seoKeywords":
- Between 5 and 10 short, distinct search phrases a reader would use to find this article."#;
