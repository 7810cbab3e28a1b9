//! Normalized result types handed to the rendering surface.

use serde::{Deserialize, Serialize};
use url::Url;

/// A web citation taken from a grounded model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Source URI, never empty.
    pub uri: String,
    /// Source title, possibly empty.
    pub title: String,
}

impl GroundingSource {
    /// Label to show for this source.
    ///
    /// Falls back to the URI's host (without a leading `www.`) when the title
    /// is empty, and to the raw URI when it has no host.
    pub fn display_label(&self) -> String {
        let title = self.title.trim();
        if !title.is_empty() {
            return title.to_string();
        }

        Url::parse(&self.uri)
            .ok()
            .and_then(|url| url.host_str().map(|host| host.trim_start_matches("www.").to_string()))
            .unwrap_or_else(|| self.uri.clone())
    }
}

/// One topic from a topic-listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsTopic {
    pub topic: String,
    pub summary: String,
    /// Sources for the whole batch, shared by every topic in it.
    pub sources: Vec<GroundingSource>,
}

/// A generated, sanitized article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArticle {
    /// Sanitized HTML fragment with no document wrapper tags.
    pub html: String,
    pub sources: Vec<GroundingSource>,
    /// Trimmed, non-empty, deduplicated keywords in first-seen order.
    pub seo_keywords: Vec<String>,
}
