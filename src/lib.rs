//! Clara: document intelligence for Brazilian citizens.
//!
//! Takes the raw text extracted from citizen-submitted documents (scans,
//! PDFs, recorded speech) and produces a plain-language explanation plus
//! speech-ready SSML. This crate holds only the deterministic
//! normalization pipeline; OCR, the generative explainer, speech
//! synthesis and the HTTP surface are external collaborators that
//! exchange plain strings with it.
//!
//! The crate emits `tracing` events but installs no subscriber; that
//! belongs to the embedding application.

pub mod admission;
pub mod config;
pub mod models;
pub mod pipeline;

pub use models::{
    ClassificationResult, DocumentAnalysis, DocumentCategory, ExtractedFields,
    StructuredTranslation,
};
pub use pipeline::{
    analyze_document, classify, extract, extract_suggestions, normalize_for_speech,
    structure_response,
};
