//! Grounding citation extraction.

use crate::GroundingSource;
use crate::model::ModelResponse;

/// Collect web citations from the first candidate's grounding metadata.
///
/// Missing metadata at any level yields an empty list. Chunks without a URI
/// are dropped; order is kept and duplicates are not removed.
pub fn extract_sources(response: &ModelResponse) -> Vec<GroundingSource> {
    let Some(metadata) = response.candidates.first().and_then(|c| c.grounding_metadata.as_ref()) else {
        return Vec::new();
    };

    metadata
        .grounding_chunks
        .iter()
        .map(|chunk| {
            let web = chunk.web.as_ref();
            GroundingSource {
                uri: web.and_then(|w| w.uri.clone()).unwrap_or_default(),
                title: web.and_then(|w| w.title.clone()).unwrap_or_default(),
            }
        })
        .filter(|source| !source.uri.is_empty())
        .collect()
}
