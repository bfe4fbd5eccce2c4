use crate::models::{DocumentCategory, ExtractedFields};

use super::patterns::{
    CASE_NUMBER_PATTERN, CURRENCY_PATTERN, DEADLINE_PATTERN, DUE_DATE_PATTERN,
    MEDICAL_VALUE_PATTERNS,
};

/// Marker note for categories without a dedicated extractor.
const GENERIC_NOTE: &str = "Documento processado para tradução em linguagem simples";

/// Pull category-specific structured fields out of raw document text.
///
/// Extraction never fails: absence of matches yields empty lists, and
/// categories without dedicated rules return the generic marker.
pub fn extract(text: &str, category: DocumentCategory) -> ExtractedFields {
    match category {
        DocumentCategory::Medical => extract_medical(text),
        DocumentCategory::Legal => extract_legal(text),
        DocumentCategory::Financial => extract_financial(text),
        _ => ExtractedFields::Generic {
            note: GENERIC_NOTE.to_string(),
        },
    }
}

/// Collect lab readings: all non-overlapping matches of every value
/// pattern, in pattern order then encounter order, duplicates kept.
fn extract_medical(text: &str) -> ExtractedFields {
    let mut exams = Vec::new();
    for pattern in MEDICAL_VALUE_PATTERNS.iter() {
        exams.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }

    ExtractedFields::Medical {
        exams,
        values: Vec::new(),
        recommendations: Vec::new(),
    }
}

/// Case number (first occurrence only) and every procedural deadline.
fn extract_legal(text: &str) -> ExtractedFields {
    let process_number = CASE_NUMBER_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .into_iter()
        .collect();

    let deadlines = DEADLINE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    ExtractedFields::Legal {
        process_number,
        deadlines,
        parties: Vec::new(),
    }
}

/// Every currency amount and the first due date.
fn extract_financial(text: &str) -> ExtractedFields {
    let amounts = CURRENCY_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let due_date = DUE_DATE_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .into_iter()
        .collect();

    ExtractedFields::Financial { amounts, due_date }
}
