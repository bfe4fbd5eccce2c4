use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a category string arriving from the transport layer does
/// not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("categoria de documento inválida: {0}")]
pub struct InvalidCategory(pub String);

/// Document category resolved by the classifier.
///
/// Declaration order doubles as the classifier's tie-break order: on equal
/// keyword score, the earlier-declared category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Medical,
    Legal,
    Financial,
    Government,
    Utility,
    Contract,
    Unknown,
}

impl DocumentCategory {
    /// Categories eligible for keyword scoring, in tie-break order.
    pub const CLASSIFIABLE: [DocumentCategory; 6] = [
        DocumentCategory::Medical,
        DocumentCategory::Legal,
        DocumentCategory::Financial,
        DocumentCategory::Government,
        DocumentCategory::Utility,
        DocumentCategory::Contract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Legal => "legal",
            Self::Financial => "financial",
            Self::Government => "government",
            Self::Utility => "utility",
            Self::Contract => "contract",
            Self::Unknown => "unknown",
        }
    }

    /// Product-facing label shown next to the explanation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Medical => "Documento Médico",
            Self::Legal => "Documento Jurídico",
            Self::Financial => "Documento Financeiro",
            Self::Government => "Documento Governamental",
            Self::Utility => "Conta de Serviços",
            Self::Contract => "Contrato",
            Self::Unknown => "Documento Geral",
        }
    }

    /// Icon glyph the frontend renders next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Medical => "🏥",
            Self::Legal => "⚖️",
            Self::Financial => "💰",
            Self::Government => "🏛️",
            Self::Utility => "🏠",
            Self::Contract => "📋",
            Self::Unknown => "📄",
        }
    }
}

impl std::str::FromStr for DocumentCategory {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medical" => Ok(Self::Medical),
            "legal" => Ok(Self::Legal),
            "financial" => Ok(Self::Financial),
            "government" => Ok(Self::Government),
            "utility" => Ok(Self::Utility),
            "contract" => Ok(Self::Contract),
            "unknown" => Ok(Self::Unknown),
            _ => Err(InvalidCategory(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_trips_via_as_str() {
        for category in DocumentCategory::CLASSIFIABLE {
            assert_eq!(
                DocumentCategory::from_str(category.as_str()).unwrap(),
                category
            );
        }
        assert_eq!(
            DocumentCategory::from_str("unknown").unwrap(),
            DocumentCategory::Unknown
        );
    }

    #[test]
    fn rejects_unrecognized_string() {
        let err = DocumentCategory::from_str("tax").unwrap_err();
        assert_eq!(err, InvalidCategory("tax".into()));
    }

    #[test]
    fn classifiable_excludes_unknown() {
        assert!(!DocumentCategory::CLASSIFIABLE.contains(&DocumentCategory::Unknown));
    }

    #[test]
    fn unknown_has_generic_label() {
        assert_eq!(DocumentCategory::Unknown.display_name(), "Documento Geral");
        assert_eq!(DocumentCategory::Unknown.icon(), "📄");
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&DocumentCategory::Medical).unwrap();
        assert_eq!(json, r#""medical""#);
    }
}
