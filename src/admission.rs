//! Upload admission policy.
//!
//! The deterministic accept/reject rule the upload layer consults before
//! a file enters the pipeline. Reading the file itself stays outside this
//! crate; only the (mime type, size) decision lives here.

use thiserror::Error;

use crate::config::MAX_UPLOAD_BYTES;

/// Mime types the extraction collaborators can pull text from.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
    "audio/webm",
    "audio/wav",
    "audio/mp3",
];

/// Why an upload was refused. Messages are the product strings shown to
/// the citizen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("Arquivo muito grande. Tamanho máximo: 10MB")]
    TooLarge { size_bytes: u64 },

    #[error("Tipo de arquivo não suportado: {mime}")]
    UnsupportedType { mime: String },
}

/// Decide whether an uploaded file may enter the pipeline.
pub fn validate_upload(mime: &str, size_bytes: u64) -> Result<(), AdmissionError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(AdmissionError::TooLarge { size_bytes });
    }

    if !SUPPORTED_MIME_TYPES.contains(&mime) {
        return Err(AdmissionError::UnsupportedType { mime: mime.into() });
    }

    Ok(())
}
