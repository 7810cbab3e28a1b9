//! Article HTML sanitization.
//!
//! Model-generated HTML is rendered verbatim, so everything goes through an
//! [`HtmlSanitizer`] first. Two implementations exist:
//!
//! - [`DomSanitizer`] parses the markup with `scraper` and detaches unsafe and
//!   document-level elements. Only available with the `dom` feature.
//! - [`RegexSanitizer`] works on the raw text with patterns. It removes the
//!   same elements but cannot reason about malformed nesting, so it is the
//!   weaker of the two.
//!
//! [`select_sanitizer`] picks one at startup.

#[cfg(feature = "dom")]
mod dom;
mod fallback;

#[cfg(feature = "dom")]
pub use dom::DomSanitizer;
pub use fallback::RegexSanitizer;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype[^>]*>").expect("DOCTYPE_RE: hardcoded regex is valid"));

/// Stable sanitizer abstraction so callers never branch on capability.
pub trait HtmlSanitizer: Send + Sync {
    /// Turn raw model HTML into a fragment safe to inject into a content region.
    fn sanitize(&self, raw_html: &str) -> String;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Which sanitizer to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizerMode {
    /// DOM when compiled in, otherwise regex.
    #[default]
    Auto,
    Dom,
    Regex,
}

/// Whether the DOM-parsing sanitizer was compiled in.
pub const fn dom_available() -> bool {
    cfg!(feature = "dom")
}

/// Pick a sanitizer for the given mode.
///
/// Asking for [`SanitizerMode::Dom`] in a build without the `dom` feature
/// degrades to the regex sanitizer with a warning.
pub fn select_sanitizer(mode: SanitizerMode) -> Box<dyn HtmlSanitizer> {
    match mode {
        SanitizerMode::Regex => Box::new(RegexSanitizer),
        SanitizerMode::Auto | SanitizerMode::Dom => {
            #[cfg(feature = "dom")]
            {
                Box::new(DomSanitizer)
            }
            #[cfg(not(feature = "dom"))]
            {
                if mode == SanitizerMode::Dom {
                    tracing::warn!("DOM sanitizer requested but the `dom` feature is disabled; using regex sanitizer");
                }
                Box::new(RegexSanitizer)
            }
        }
    }
}

/// Sanitize with the best sanitizer available in this build.
pub fn sanitize_article_html(raw_html: &str) -> String {
    select_sanitizer(SanitizerMode::Auto).sanitize(raw_html)
}

/// Remove any `<!DOCTYPE ...>` declaration and trim.
pub(crate) fn strip_doctype(html: &str) -> String {
    DOCTYPE_RE.replace_all(html, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = "<!DOCTYPE html><html><head><title>T</title></head><body><p>X</p></body></html>";

    #[test]
    fn test_strip_doctype() {
        assert_eq!(strip_doctype("<!doctype HTML>\n<p>a</p> "), "<p>a</p>");
        assert_eq!(strip_doctype("<p>a</p>"), "<p>a</p>");
    }

    #[test]
    fn test_select_regex() {
        assert_eq!(select_sanitizer(SanitizerMode::Regex).name(), "regex");
    }

    #[test]
    fn test_select_auto_matches_capability() {
        let expected = if dom_available() { "dom" } else { "regex" };
        assert_eq!(select_sanitizer(SanitizerMode::Auto).name(), expected);
        assert_eq!(select_sanitizer(SanitizerMode::Dom).name(), expected);
    }

    #[test]
    fn test_sanitize_article_html_unwraps_document() {
        let out = sanitize_article_html(WRAPPED);
        assert!(out.contains("<p>X</p>"));
        assert!(!out.contains("<head"));
        assert!(!out.contains("<title"));
        assert!(!out.contains("<html"));
        assert!(!out.contains("DOCTYPE"));
    }

    #[test]
    fn test_both_sanitizers_agree_on_wrapped_document() {
        let regex = select_sanitizer(SanitizerMode::Regex).sanitize(WRAPPED);
        let best = select_sanitizer(SanitizerMode::Auto).sanitize(WRAPPED);
        assert_eq!(regex, "<p>X</p>");
        assert_eq!(best, "<p>X</p>");
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: SanitizerMode = serde_json::from_str("\"regex\"").unwrap();
        assert_eq!(mode, SanitizerMode::Regex);
    }
}
