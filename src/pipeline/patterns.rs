//! Static pattern tables backing the pipeline stages.
//!
//! Keyword sets, extraction regexes, spoken-form substitutions and the
//! emphasis vocabulary. Everything here is built once and read-only
//! afterwards; stages borrow the tables, they never mutate them.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DocumentCategory;

/// Keyword set backing one classifiable category.
pub struct CategoryKeywords {
    pub category: DocumentCategory,
    /// Lower-case keywords matched as substrings of the lowered text.
    pub keywords: &'static [&'static str],
}

/// Keyword tables, in the classifier's tie-break order.
pub static CATEGORY_KEYWORDS: &[CategoryKeywords] = &[
    CategoryKeywords {
        category: DocumentCategory::Medical,
        keywords: &[
            "exame",
            "resultado",
            "hemograma",
            "leucócitos",
            "hemoglobina",
            "glicose",
            "colesterol",
            "médico",
            "hospital",
            "laboratório",
        ],
    },
    CategoryKeywords {
        category: DocumentCategory::Legal,
        keywords: &[
            "tribunal",
            "juiz",
            "sentença",
            "processo",
            "citação",
            "intimação",
            "advogado",
            "réu",
            "autor",
            "judicial",
        ],
    },
    CategoryKeywords {
        category: DocumentCategory::Financial,
        keywords: &[
            "banco",
            "conta",
            "saldo",
            "extrato",
            "empréstimo",
            "financiamento",
            "juros",
            "parcela",
            "boleto",
        ],
    },
    CategoryKeywords {
        category: DocumentCategory::Government,
        keywords: &[
            "prefeitura",
            "governo",
            "secretaria",
            "certidão",
            "licença",
            "alvará",
            "protocolo",
            "benefício",
        ],
    },
    CategoryKeywords {
        category: DocumentCategory::Utility,
        keywords: &[
            "energia",
            "água",
            "esgoto",
            "telefone",
            "internet",
            "conta de luz",
            "cemig",
            "sabesp",
            "copasa",
        ],
    },
    CategoryKeywords {
        category: DocumentCategory::Contract,
        keywords: &[
            "contrato",
            "locação",
            "aluguel",
            "locador",
            "locatário",
            "cláusula",
            "termo",
            "acordo",
        ],
    },
];

/// Lab value patterns harvested from medical documents, in harvest order.
pub static MEDICAL_VALUE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)hemoglobin[ai]?\s*:?\s*([0-9,.]+ ?g?/?d?L?)").unwrap(),
        Regex::new(r"(?i)leucócitos?\s*:?\s*([0-9,.]+/?mm³?)").unwrap(),
        Regex::new(r"(?i)glicose\s*:?\s*([0-9,.]+ ?mg?/?d?L?)").unwrap(),
        Regex::new(r"(?i)colesterol\s*:?\s*([0-9,.]+ ?mg?/?d?L?)").unwrap(),
    ]
});

/// CNJ unified case numbering: NNNNNNN-DD.AAAA.J.TR.OOOO.
pub static CASE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{7}-\d{2}\.\d{4}\.\d{1}\.\d{2}\.\d{4}").unwrap());

/// Procedural deadlines: "prazo de N dias".
pub static DEADLINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)prazo\s+de\s+(\d+)\s+dias?").unwrap());

/// Currency amounts: "R$ 1.234,56".
pub static CURRENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)R\$\s*([0-9,.]+)").unwrap());

/// Payment due dates: "vencimento: DD/MM/YYYY".
pub static DUE_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)vencimento:?\s*(\d{1,2}/\d{1,2}/\d{4})").unwrap());

/// Literal spoken-form substitutions applied before pause insertion.
///
/// Applied top to bottom as plain substring replacement, not word-bounded.
/// Invariant: no later literal may contain an earlier one as a substring,
/// or the earlier sweep would split the longer form before its turn.
pub static SPOKEN_REPLACEMENTS: &[(&str, &str)] = &[
    // Ordinals
    ("1°", "primeiro"),
    ("2°", "segundo"),
    ("3°", "terceiro"),
    ("1ª", "primeira"),
    ("2ª", "segunda"),
    ("3ª", "terceira"),
    // Honorifics, feminine forms first
    ("Dra.", "Doutora"),
    ("Dr.", "Doutor"),
    ("Sra.", "Senhora"),
    ("Sr.", "Senhor"),
    ("Profa.", "Professora"),
    ("Prof.", "Professor"),
    // Measurement units spoken in full
    ("mg/dL", "miligramas por decilitro"),
    ("mm³", "milímetros cúbicos"),
    ("g/L", "gramas por litro"),
    // Acronyms and sigla spellings
    ("RBC", "hemácias"),
    ("WBC", "leucócitos"),
    ("RG", "documento de identidade"),
    ("CNPJ", "ce ene pê jota"),
    ("CPF", "ce pê efe"),
];

/// Words spoken with strong emphasis.
pub static EMPHASIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(importante|atenção|cuidado|urgente|emergência)\b").unwrap()
});
