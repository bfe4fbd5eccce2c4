use std::sync::LazyLock;

use regex::Regex;

use crate::config::{MAX_SUGGESTIONS, SUGGESTION_FALLBACK};

/// Advisory sentence triggers, applied in declaration order. Each match
/// captures the trigger plus the rest of the sentence.
static SUGGESTION_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:sugiro|recomendo|seria bom|você pode|experimente)[^.!?]+[.!?]")
            .unwrap(),
        Regex::new(r"(?i)(?:próximo passo|você deve|é importante)[^.!?]+[.!?]").unwrap(),
    ]
});

/// Harvest advisory fragments from the collaborator's answer.
///
/// Matches of the first trigger family come before the second regardless
/// of their position in the text. Always returns one to three entries; a
/// fixed fallback stands in when nothing matches.
pub fn extract_suggestions(response: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    for pattern in SUGGESTION_PATTERNS.iter() {
        suggestions.extend(
            pattern
                .find_iter(response)
                .map(|m| m.as_str().trim().to_string()),
        );
    }

    if suggestions.is_empty() {
        suggestions.push(SUGGESTION_FALLBACK.to_string());
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
