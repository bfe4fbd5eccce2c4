use crate::models::ClassificationResult;

use super::patterns::CATEGORY_KEYWORDS;

/// Score the text against every category keyword set and return the best
/// match.
///
/// A category's score is the number of its keywords found as
/// case-insensitive substrings of the text. The running best is replaced
/// only on a strictly greater score, so ties keep the earlier-declared
/// category. A text matching no keyword at all resolves to `Unknown` with
/// score 0.
pub fn classify(text: &str) -> ClassificationResult {
    let lowered = text.to_lowercase();

    let mut best = ClassificationResult::unknown();
    for table in CATEGORY_KEYWORDS {
        let score = table
            .keywords
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .count() as u32;

        if score > best.score {
            best = ClassificationResult::for_category(table.category, score);
        }
    }

    tracing::debug!(
        category = best.category.as_str(),
        score = best.score,
        "document type detected"
    );

    best
}
