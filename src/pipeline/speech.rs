//! Text-to-speech normalization.
//!
//! Turns plain explanation text into SSML the synthesis collaborator can
//! speak naturally: abbreviations spelled out, pauses after punctuation,
//! emphasis on warning words, slowed prosody. Pass order is load-bearing.
//! Spoken-form substitution must run before pause insertion (it removes
//! abbreviation periods), and the pause pass is built in a single scan so
//! the punctuation inside its own `<break/>` attributes is never
//! revisited. The output is NOT valid input for another round: re-running
//! the normalizer over its own markup corrupts the break attributes.

use crate::config::{
    CLAUSE_PAUSE, COMMA_PAUSE, PARAGRAPH_PAUSE, PROSODY_PITCH, PROSODY_RATE, SENTENCE_PAUSE,
};

use super::patterns::{EMPHASIS_PATTERN, SPOKEN_REPLACEMENTS};

/// Normalize plain text into a root-wrapped SSML document.
///
/// Total over any input, including empty. Not idempotent.
pub fn normalize_for_speech(text: &str) -> String {
    let mut body = apply_spoken_replacements(text);
    body = insert_punctuation_pauses(&body);
    body = wrap_emphasis(&body);
    body = body.replace("\n\n", &format!("\n<break time=\"{PARAGRAPH_PAUSE}\"/>\n"));

    format!(
        "<speak>\n  <prosody rate=\"{PROSODY_RATE}\" pitch=\"{PROSODY_PITCH}\">\n    {body}\n  </prosody>\n</speak>"
    )
}

/// Pass 1: literal spoken-form substitutions, in table order.
fn apply_spoken_replacements(text: &str) -> String {
    let mut out = text.to_string();
    for (literal, spoken) in SPOKEN_REPLACEMENTS {
        out = out.replace(literal, spoken);
    }
    out
}

/// Pass 2: pause markers after punctuation.
///
/// Single scan over the input; injected markup is appended to the output
/// and never re-examined, so the `.` inside `time="0.5s"` cannot match.
fn insert_punctuation_pauses(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        out.push(ch);
        match ch {
            '.' | '!' | '?' => push_pause(&mut out, SENTENCE_PAUSE),
            ':' | ';' => push_pause(&mut out, CLAUSE_PAUSE),
            ',' => push_pause(&mut out, COMMA_PAUSE),
            _ => {}
        }
    }
    out
}

fn push_pause(out: &mut String, duration: &str) {
    out.push_str(" <break time=\"");
    out.push_str(duration);
    out.push_str("\"/>");
}

/// Pass 3: strong emphasis on the warning vocabulary, casing preserved.
fn wrap_emphasis(text: &str) -> String {
    EMPHASIS_PATTERN
        .replace_all(text, "<emphasis level=\"strong\">$1</emphasis>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_well_formed_empty_body() {
        let ssml = normalize_for_speech("");
        assert!(ssml.starts_with("<speak>"));
        assert!(ssml.ends_with("</speak>"));
        assert!(ssml.contains("<prosody rate=\"0.9\" pitch=\"0\">"));
    }

    #[test]
    fn abbreviations_are_spoken_before_pauses_apply() {
        let ssml = normalize_for_speech("Dra. Ana mediu 92 mg/dL no exame.");
        // The honorific period is gone, so no pause was injected for it.
        assert!(ssml.contains("Doutora Ana"));
        assert!(!ssml.contains("Doutora. "));
        assert!(ssml.contains("92 miligramas por decilitro"));
    }

    #[test]
    fn sentence_clause_and_comma_pauses_differ() {
        let ssml = normalize_for_speech("Primeiro: leia tudo, depois assine.");
        assert!(ssml.contains(": <break time=\"0.3s\"/>"));
        assert!(ssml.contains(", <break time=\"0.2s\"/>"));
        assert!(ssml.contains(". <break time=\"0.5s\"/>"));
    }

    #[test]
    fn warning_words_gain_emphasis_with_original_casing() {
        let ssml = normalize_for_speech("Atenção: isso é importante.");
        assert!(ssml.contains("<emphasis level=\"strong\">Atenção</emphasis>"));
        assert!(ssml.contains("<emphasis level=\"strong\">importante</emphasis>"));
    }

    #[test]
    fn acronyms_are_spelled_out() {
        let ssml = normalize_for_speech("Traga o CPF e o RG");
        assert!(ssml.contains("ce pê efe"));
        assert!(ssml.contains("documento de identidade"));
    }

    #[test]
    fn paragraph_breaks_get_long_pauses() {
        let ssml = normalize_for_speech("Primeiro parágrafo\n\nSegundo parágrafo");
        assert!(ssml.contains("\n<break time=\"1s\"/>\n"));
    }

    #[test]
    fn ordinals_are_spoken() {
        let ssml = normalize_for_speech("O 1° andar e a 2ª sala");
        assert!(ssml.contains("primeiro andar"));
        assert!(ssml.contains("segunda sala"));
    }

    #[test]
    fn pause_markers_are_not_rescanned_within_one_application() {
        let ssml = normalize_for_speech("Fim.");
        // Exactly one break for the one period; the marker's own "0.5s"
        // period must not spawn another.
        assert_eq!(ssml.matches("<break").count(), 1);
    }

    #[test]
    fn reapplication_is_not_idempotent() {
        let once = normalize_for_speech("Tudo certo.");
        let twice = normalize_for_speech(&once);
        // The second round splits the break attribute at its decimal
        // point, which is exactly why the output must not be fed back in.
        assert_ne!(twice, once);
        assert!(twice.contains("0. <break"));
    }
}
