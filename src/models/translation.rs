use serde::{Deserialize, Serialize};

/// Three-part plain-language translation derived from the generative
/// collaborator's free-form response.
///
/// `summary` and `action_items` always hold between one and three entries;
/// fallback placeholders are substituted when heuristic extraction yields
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredTranslation {
    pub explanation: String,
    pub summary: Vec<String>,
    pub action_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let translation = StructuredTranslation {
            explanation: "Explicação".into(),
            summary: vec!["Ponto".into()],
            action_items: vec!["Passo".into()],
        };
        let json = serde_json::to_value(&translation).unwrap();
        assert_eq!(json["explanation"], "Explicação");
        assert_eq!(json["actionItems"][0], "Passo");
    }
}
