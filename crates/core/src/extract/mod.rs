//! Structured extraction from raw model output.
//!
//! ### Topic-list protocol
//! - `{"trends": [{"topic": ..., "summary": ...}, ...]}`
//! - Any malformed item fails the whole batch.
//!
//! ### Article protocol
//! - `{"articleHtml" | "article_html": ..., "seoKeywords" | "seo_keywords": [...]}`
//! - Keys are resolved through an alias table, camelCase first.
//! - HTML is always sanitized before it is returned.
//!
//! ### Grounding
//! - Citations come from the first candidate's grounding chunks and never
//!   cause a failure.

pub mod article;
pub mod grounding;
pub mod topics;

pub use article::{ArticlePayload, extract_article};
pub use grounding::extract_sources;
pub use topics::extract_topics;

use serde_json::Value;

use crate::Error;
use crate::text::strip_code_fences;

/// Strip fences, reject blank payloads and parse the rest as JSON.
fn parse_json_payload(raw: &str, what: &str) -> Result<Value, Error> {
    let payload = strip_code_fences(raw);
    if payload.is_empty() {
        return Err(Error::EmptyContent(what.to_string()));
    }

    serde_json::from_str(&payload).map_err(|e| {
        tracing::debug!(error = %e, bytes = payload.len(), "model output is not valid JSON");
        Error::Parse(e.to_string())
    })
}
