//! General news and manual article prompts.

use super::{ARTICLE_JSON_CONTRACT, escape_quotes};

/// Number of topics requested for the general news listing.
pub const NEWS_TOPIC_COUNT: usize = 20;

/// Prompt for the current top news topics in Sri Lanka.
pub fn news_trends_prompt() -> String {
    format!(
        r#"Use Google Search to find the {count} most important and most discussed news topics in Sri Lanka right now.
Cover a mix of politics, economy, business, sport, weather, transport and society, and prefer stories from the last 24 hours.
For each topic write a neutral, factual summary of two or three sentences.
Respond with a single JSON object and nothing else, in exactly this shape:
{{"trends": [{{"topic": "Short headline", "summary": "Two or three sentence summary."}}]}}
The "trends" array must contain exactly {count} items, and every item must have both "topic" and "summary"."#,
        count = NEWS_TOPIC_COUNT
    )
}

/// Prompt for a full news article on a user-supplied topic.
pub fn manual_article_prompt(topic: &str) -> String {
    format!(
        r#"Use Google Search to research the following topic as it relates to Sri Lanka: "{topic}".
Write an original, well-structured news article of 600 to 900 words for a Sri Lankan news website.
Start with a strong introductory paragraph, use descriptive subheadings, attribute facts to their sources in the text, and end with a short conclusion.
Do not invent quotes, figures or dates that you cannot find in your search results.
{contract}"#,
        topic = escape_quotes(topic.trim()),
        contract = ARTICLE_JSON_CONTRACT
    )
}
