//! Railway travel prompts.

use super::{ARTICLE_JSON_CONTRACT, escape_quotes};

/// Number of topics requested for the railway listing.
pub const RAILWAY_TOPIC_COUNT: usize = 30;

/// Thematic emphases rotated across railway topic requests.
pub const RAILWAY_THEMES: [&str; 10] = [
    "scenic hill country routes such as Kandy to Ella and the Nine Arch Bridge",
    "coastal line journeys between Colombo, Galle and Matara",
    "northern line travel to Jaffna and Kankesanthurai",
    "eastern line services to Batticaloa and Trincomalee",
    "ticket booking, reserved seats and observation saloon tips",
    "railway history, heritage locomotives and colonial-era stations",
    "timetable changes, new services and infrastructure projects",
    "budget travel, backpacking and family trips by train",
    "food, markets and local culture around railway stations",
    "photography spots, festivals and seasonal travel by rail",
];

/// Prompt for a fresh list of railway travel topics.
///
/// `session_token` and `theme` are chosen by the caller so that repeated
/// requests ask for different material.
pub fn railway_topics_prompt(session_token: &str, theme: &str) -> String {
    format!(
        r#"Session: {session_token}
Use Google Search to find {count} current, interesting and distinct topics about train travel in Sri Lanka.
For this session, give extra emphasis to: {theme}.
Include practical news (timetables, fares, disruptions, new services) as well as travel inspiration, and avoid repeating the same route or station more than twice.
For each topic write a short, engaging summary of two or three sentences.
Respond with a single JSON object and nothing else, in exactly this shape:
{{"trends": [{{"topic": "Short headline", "summary": "Two or three sentence summary."}}]}}
The "trends" array must contain exactly {count} items, and every item must have both "topic" and "summary"."#,
        session_token = escape_quotes(session_token),
        theme = escape_quotes(theme),
        count = RAILWAY_TOPIC_COUNT
    )
}

/// Prompt for a railway travel article on the given topic.
pub fn railway_article_prompt(topic: &str) -> String {
    format!(
        r#"Use Google Search to research the following Sri Lankan railway travel topic: "{topic}".
Write an original, engaging travel article of 600 to 900 words for a website about train journeys in Sri Lanka.
Include practical details where you can verify them (routes, departure stations, classes of travel, typical journey times, booking advice) and describe the scenery and experience.
Do not invent fares, timetables or quotes that you cannot find in your search results.
{contract}"#,
        topic = escape_quotes(topic.trim()),
        contract = ARTICLE_JSON_CONTRACT
    )
}
