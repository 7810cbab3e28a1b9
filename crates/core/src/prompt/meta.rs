//! Meta description builder for the SEO workflow.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a meta description, in characters.
pub const META_DESCRIPTION_MAX_LEN: usize = 155;

const ELLIPSIS: &str = "...";

/// Word-boundary cuts are only taken past this share of the maximum length.
const WORD_BOUNDARY_RATIO: f64 = 0.6;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG_RE: hardcoded regex is valid"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE: hardcoded regex is valid"));

/// Build a meta description from sanitized article HTML.
///
/// The returned text always mentions `keyword` (prepended as `"<keyword>. "`
/// when the article does not contain it as a whole word within the part that
/// survives truncation) and is at most [`META_DESCRIPTION_MAX_LEN`]
/// characters, ending in `...` when truncated.
pub fn build_meta_description(keyword: &str, html: &str) -> String {
    let keyword = keyword.trim();
    let text = collapse_whitespace(&decode_entities(&TAG_RE.replace_all(html, " ")));

    let description = truncate(&text);
    if keyword.is_empty() || contains_word(&description, keyword) {
        return description;
    }

    truncate(&collapse_whitespace(&format!("{}. {}", keyword, text)))
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Case-insensitive whole-word match.
fn contains_word(text: &str, word: &str) -> bool {
    let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(word));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::debug!(error = %e, "keyword pattern rejected; falling back to substring match");
            text.to_lowercase().contains(&word.to_lowercase())
        }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= META_DESCRIPTION_MAX_LEN {
        return text.to_string();
    }

    let budget = META_DESCRIPTION_MAX_LEN - ELLIPSIS.len();
    let cut: String = text.chars().take(budget).collect();
    let min_boundary = (META_DESCRIPTION_MAX_LEN as f64 * WORD_BOUNDARY_RATIO) as usize;

    let cut = match cut.rfind(' ') {
        Some(idx) if cut[..idx].chars().count() > min_boundary => &cut[..idx],
        _ => cut.as_str(),
    };

    let cut = cut.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
    format!("{}{}", cut, ELLIPSIS)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
