use crate::models::DocumentAnalysis;

use super::classify::classify;
use super::extract::extract;

/// Run the full analysis over raw extracted text: classify, then pull the
/// resolved category's structured fields.
pub fn analyze_document(text: &str) -> DocumentAnalysis {
    let classification = classify(text);
    let fields = extract(text, classification.category);

    tracing::info!(
        category = classification.category.as_str(),
        score = classification.score,
        chars = text.chars().count(),
        "document analyzed"
    );

    DocumentAnalysis {
        classification,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentCategory, ExtractedFields};

    #[test]
    fn analysis_extracts_with_the_resolved_category() {
        let analysis =
            analyze_document("Extrato do banco: saldo devedor de R$ 1.250,00 na conta corrente");
        assert_eq!(analysis.classification.category, DocumentCategory::Financial);
        let ExtractedFields::Financial { amounts, .. } = analysis.fields else {
            panic!("expected financial fields");
        };
        assert_eq!(amounts, vec!["R$ 1.250,00"]);
    }

    #[test]
    fn unclassifiable_text_gets_the_generic_marker() {
        let analysis = analyze_document("bom dia, tudo bem?");
        assert_eq!(analysis.classification.category, DocumentCategory::Unknown);
        assert!(matches!(analysis.fields, ExtractedFields::Generic { .. }));
    }
}
