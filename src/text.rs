//! Input normalization for speech synthesis.
//!
//! Upstream content arrives with lightweight markup (emphasis, headers,
//! links, list bullets) that a synthesizer would read out loud. This module
//! strips it down to plain prose and enforces the provider's length ceiling.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Inputs longer than this are truncated before synthesis.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Markup removal rules, applied in order. Emphasis markers keep their inner
/// text; structural prefixes (headers, quotes, bullets) are dropped entirely.
static MARKUP_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\*\*([^*]+?)\*\*").unwrap(), "$1"),
        (Regex::new(r"\*([^*]+?)\*").unwrap(), "$1"),
        (Regex::new(r"_([^_]+?)_").unwrap(), "$1"),
        (Regex::new(r"#+\s*").unwrap(), ""),
        (Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(), "$1"),
        (Regex::new(r"\[([^\]]+)\]").unwrap(), "$1"),
        (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
        (Regex::new(r"^\s*>\s*").unwrap(), ""),
        (Regex::new(r"^\s*[-*+]\s*").unwrap(), ""),
        (Regex::new(r"^\s*\d+\.\s*").unwrap(), ""),
    ]
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup, collapse whitespace runs to single spaces and trim.
///
/// Returns an empty string for input that carries no speakable text, which
/// callers treat as an empty-input failure. Output never exceeds
/// [`MAX_INPUT_CHARS`] characters plus a trailing ellipsis.
pub fn normalize(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (pattern, replacement) in MARKUP_RULES.iter() {
        cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
    }
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    let length = cleaned.chars().count();
    if length > MAX_INPUT_CHARS {
        warn!(
            length,
            limit = MAX_INPUT_CHARS,
            "input text too long for synthesis, truncating"
        );
        let mut truncated: String = cleaned.chars().take(MAX_INPUT_CHARS).collect();
        truncated.push_str("...");
        return truncated;
    }
    cleaned.to_string()
}
