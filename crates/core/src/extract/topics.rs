//! Topic-list extraction.

use serde::Deserialize;

use super::parse_json_payload;
use crate::{Error, GroundingSource, NewsTopic};

#[derive(Debug, Deserialize)]
struct TrendsPayload {
    trends: Vec<TrendItem>,
}

#[derive(Debug, Deserialize)]
struct TrendItem {
    topic: String,
    summary: String,
}

/// Parse a topic-list response and attach the batch's sources to every topic.
///
/// # Errors
///
/// - `EmptyContent` when the payload is blank
/// - `Parse` when it is not JSON
/// - `InvalidFormat` when `trends` is missing or any item lacks a string
///   `topic` or `summary`
pub fn extract_topics(raw: &str, sources: &[GroundingSource]) -> Result<Vec<NewsTopic>, Error> {
    let value = parse_json_payload(raw, "response")?;

    if value.get("trends").is_none_or(|trends| !trends.is_array()) {
        return Err(Error::InvalidFormat("expected a `trends` array".into()));
    }

    let payload: TrendsPayload =
        serde_json::from_value(value).map_err(|e| Error::InvalidFormat(format!("malformed trend item: {}", e)))?;

    Ok(payload
        .trends
        .into_iter()
        .map(|item| NewsTopic { topic: item.topic, summary: item.summary, sources: sources.to_vec() })
        .collect())
}
