//! Heuristic sectioning of the generative collaborator's free-form
//! response into explanation, summary and next steps.
//!
//! The detection is keyword-based by design: trigger phrases and list
//! markers, not grammar. Responses with no recognizable structure fall
//! back to the whole text plus placeholder lists.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    ACTION_ITEMS_FALLBACK, MAX_ACTION_ITEMS, MAX_SUMMARY_ITEMS, MIN_EXPLANATION_CHARS,
    SUMMARY_FALLBACK,
};
use crate::models::StructuredTranslation;

/// Leading "1."-style ordinal marker.
static ORDINAL_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

/// Strips a leading list marker ("1.", "•", "-") and the spaces after it.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*|^[•-]\s*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Explanation,
    Summary,
    Actions,
}

/// Split a free-form response into the three-part translation.
///
/// State machine over trimmed non-empty lines, starting in the
/// explanation section. Trigger lines switch sections and are consumed;
/// marker lines feed the active list; plain lines feed the explanation
/// only while no list section is active.
pub fn structure_response(response: &str) -> StructuredTranslation {
    let mut explanation = String::new();
    let mut summary: Vec<String> = Vec::new();
    let mut action_items: Vec<String> = Vec::new();
    let mut section = Section::Explanation;

    for line in response.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();

        if lowered.contains("resumo") || lowered.contains("pontos principais") {
            section = Section::Summary;
            continue;
        }
        if lowered.contains("próximos passos") || lowered.contains("o que fazer") {
            section = Section::Actions;
            continue;
        }

        match section {
            Section::Explanation => {
                if ORDINAL_MARKER.is_match(line) {
                    // A numbered list with no heading opens the summary;
                    // the opening line is consumed like any trigger.
                    section = Section::Summary;
                } else {
                    if !explanation.is_empty() {
                        explanation.push(' ');
                    }
                    explanation.push_str(line);
                }
            }
            Section::Summary | Section::Actions => {
                if ORDINAL_MARKER.is_match(line) || line.starts_with('•') || line.starts_with('-')
                {
                    let item = LIST_MARKER.replace(line, "").to_string();
                    if section == Section::Summary {
                        summary.push(item);
                    } else {
                        action_items.push(item);
                    }
                }
                // Plain prose inside a list section is dropped.
            }
        }
    }

    // Too little extracted prose means the response was unstructured;
    // present it as one block instead.
    if explanation.chars().count() < MIN_EXPLANATION_CHARS {
        explanation = response.to_string();
    }
    let explanation = explanation.trim().to_string();

    if summary.is_empty() {
        summary.push(SUMMARY_FALLBACK.to_string());
    }
    if action_items.is_empty() {
        action_items.push(ACTION_ITEMS_FALLBACK.to_string());
    }
    summary.truncate(MAX_SUMMARY_ITEMS);
    action_items.truncate(MAX_ACTION_ITEMS);

    StructuredTranslation {
        explanation,
        summary,
        action_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_OPENING: &str = "Olá! Este documento é uma notificação do banco explicando \
        que a sua conta teve movimentação incomum no último mês.";

    #[test]
    fn short_headed_list_falls_back_to_full_text() {
        let response = "Resumo: \n1. Ponto A\n2. Ponto B";
        let result = structure_response(response);
        assert_eq!(result.summary, vec!["Ponto A", "Ponto B"]);
        // Nothing reached the explanation buffer, so the whole response
        // stands in for it.
        assert_eq!(result.explanation, response.trim());
        assert_eq!(result.action_items, vec![ACTION_ITEMS_FALLBACK]);
    }

    #[test]
    fn fully_structured_response_is_split() {
        let response = format!(
            "{LONG_OPENING}\n\nResumo dos pontos principais:\n1. Houve movimentação incomum\n• O banco pede confirmação\n\nPróximos passos:\n- Leve um documento com foto\n- Procure a agência mais próxima"
        );
        let result = structure_response(&response);
        assert_eq!(result.explanation, LONG_OPENING);
        assert_eq!(
            result.summary,
            vec!["Houve movimentação incomum", "O banco pede confirmação"]
        );
        assert_eq!(
            result.action_items,
            vec![
                "Leve um documento com foto",
                "Procure a agência mais próxima"
            ]
        );
    }

    #[test]
    fn ordinal_lines_feed_the_actions_list_once_active() {
        let response = format!(
            "{LONG_OPENING}\n\nO que fazer:\n1. Separe os documentos\n2. Agende o atendimento"
        );
        let result = structure_response(&response);
        assert_eq!(
            result.action_items,
            vec!["Separe os documentos", "Agende o atendimento"]
        );
        assert_eq!(result.summary, vec![SUMMARY_FALLBACK]);
    }

    #[test]
    fn lists_are_capped_at_three_in_encounter_order() {
        let response = format!(
            "{LONG_OPENING}\n\nResumo:\n- um\n- dois\n- três\n- quatro\n- cinco"
        );
        let result = structure_response(&response);
        assert_eq!(result.summary, vec!["um", "dois", "três"]);
    }

    #[test]
    fn unstructured_response_becomes_one_block() {
        let response = "O documento diz que a consulta foi remarcada para a próxima semana \
            e pede que a pessoa chegue com meia hora de antecedência.";
        let result = structure_response(response);
        assert_eq!(result.explanation, response);
        assert_eq!(result.summary, vec![SUMMARY_FALLBACK]);
        assert_eq!(result.action_items, vec![ACTION_ITEMS_FALLBACK]);
    }

    #[test]
    fn explanation_lines_are_space_joined() {
        let response = "Primeira linha da explicação do documento enviado.\nSegunda linha \
            complementando a mesma ideia.\n\nResumo:\n- ponto único";
        let result = structure_response(response);
        assert_eq!(
            result.explanation,
            "Primeira linha da explicação do documento enviado. Segunda linha complementando a mesma ideia."
        );
    }

    #[test]
    fn trigger_lines_are_consumed_not_appended() {
        let response =
            format!("{LONG_OPENING}\n\nResumo dos pontos principais:\n- só este ponto");
        let result = structure_response(&response);
        assert!(!result.explanation.contains("Resumo"));
        assert_eq!(result.summary, vec!["só este ponto"]);
    }

    #[test]
    fn prose_inside_a_list_section_is_dropped() {
        let response = format!(
            "{LONG_OPENING}\n\nResumo:\nEssa linha não tem marcador e não entra.\n- este ponto entra"
        );
        let result = structure_response(&response);
        assert_eq!(result.summary, vec!["este ponto entra"]);
        assert!(!result.explanation.contains("não entra"));
    }

    #[test]
    fn bounds_always_hold() {
        let listy = format!("{LONG_OPENING}\nResumo:\n- a\n- b\n- c\n- d");
        for response in ["", "curto", listy.as_str()] {
            let result = structure_response(response);
            assert!((1..=3).contains(&result.summary.len()));
            assert!((1..=3).contains(&result.action_items.len()));
        }
    }
}
