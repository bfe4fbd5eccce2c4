/// Application-level constants
pub const APP_NAME: &str = "Clara";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on summary bullets kept from a structured response.
pub const MAX_SUMMARY_ITEMS: usize = 3;

/// Upper bound on next-step items kept from a structured response.
pub const MAX_ACTION_ITEMS: usize = 3;

/// Upper bound on advisory suggestions harvested from an answer.
pub const MAX_SUGGESTIONS: usize = 3;

/// An extracted explanation shorter than this is treated as unstructured
/// and the whole response is used in its place.
pub const MIN_EXPLANATION_CHARS: usize = 50;

/// Pause inserted after sentence punctuation (`.` `!` `?`).
pub const SENTENCE_PAUSE: &str = "0.5s";

/// Pause inserted after clause punctuation (`:` `;`).
pub const CLAUSE_PAUSE: &str = "0.3s";

/// Pause inserted after a comma.
pub const COMMA_PAUSE: &str = "0.2s";

/// Pause inserted between paragraphs.
pub const PARAGRAPH_PAUSE: &str = "1s";

/// Default prosody: slightly slowed for comprehension, neutral pitch.
pub const PROSODY_RATE: &str = "0.9";
pub const PROSODY_PITCH: &str = "0";

/// Substituted when a structured response yields no summary bullets.
pub const SUMMARY_FALLBACK: &str = "Documento analisado com explicação detalhada acima";

/// Substituted when a structured response yields no next steps.
pub const ACTION_ITEMS_FALLBACK: &str = "Procure orientação profissional adequada se necessário";

/// Substituted when an answer contains no recognizable suggestion.
pub const SUGGESTION_FALLBACK: &str =
    "Se precisar de mais esclarecimentos, procure ajuda profissional especializada.";

/// Largest accepted upload, in bytes (10MB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
