use serde::{Deserialize, Serialize};

use super::enums::DocumentCategory;

/// Outcome of keyword classification over raw document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: DocumentCategory,
    /// Count of distinct category keywords found in the text.
    pub score: u32,
    pub display_name: String,
    pub icon: String,
}

impl ClassificationResult {
    pub fn for_category(category: DocumentCategory, score: u32) -> Self {
        Self {
            category,
            score,
            display_name: category.display_name().to_string(),
            icon: category.icon().to_string(),
        }
    }

    /// The starting point of classification: no keyword matched anywhere.
    pub fn unknown() -> Self {
        Self::for_category(DocumentCategory::Unknown, 0)
    }
}

/// Category-specific structured fields pulled from document text.
///
/// Values are raw matched substrings in encounter order, duplicates
/// preserved, never normalized or validated further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExtractedFields {
    #[serde(rename_all = "camelCase")]
    Medical {
        exams: Vec<String>,
        values: Vec<String>,
        recommendations: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Legal {
        /// At most one entry: the first case number found.
        process_number: Vec<String>,
        deadlines: Vec<String>,
        parties: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Financial {
        amounts: Vec<String>,
        /// At most one entry: the first due date found.
        due_date: Vec<String>,
    },
    /// Marker for categories without a dedicated extractor.
    #[serde(rename_all = "camelCase")]
    Generic { note: String },
}

/// Classifier + extractor composition returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub classification: ClassificationResult,
    pub fields: ExtractedFields,
}
