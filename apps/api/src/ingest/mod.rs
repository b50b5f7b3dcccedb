// Document ingestion: turns an uploaded résumé (PDF or DOCX) into plain text.
// Everything happens in memory; the scoring engine only ever sees the text.

pub mod docx;
pub mod pdf;

use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported file format. Only PDF and DOCX files are allowed.")]
    UnsupportedFormat { filename: Option<String> },

    #[error("{0}")]
    EmptyDocument(&'static str),

    #[error("Could not read {format} document: {reason}")]
    Extraction {
        format: DocumentFormat,
        reason: String,
    },
}

/// Container formats accepted for the candidate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Docx => f.write_str("DOCX"),
        }
    }
}

impl DocumentFormat {
    /// Detects the format from the upload's file extension (case-insensitive).
    pub fn from_filename(filename: Option<&str>) -> Result<Self, IngestError> {
        let extension = filename
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(IngestError::UnsupportedFormat {
                filename: filename.map(str::to_owned),
            }),
        }
    }
}

/// Extracts the raw text of a document held in memory.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, IngestError> {
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes)?,
        DocumentFormat::Docx => docx::extract_text(bytes)?,
    };
    debug!(%format, bytes = bytes.len(), chars = text.chars().count(), "Extracted document text");
    Ok(text)
}
