//! DOCX text extraction.
//!
//! Reads `word/document.xml` out of the zip container and flattens the body:
//! text runs verbatim, `<w:tab/>` as `\t`, `<w:br/>`/`<w:cr/>` and paragraph
//! ends as `\n`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::ingest::{DocumentFormat, IngestError};

const DOCUMENT_PART: &str = "word/document.xml";

pub const EMPTY_DOCX_MESSAGE: &str = "The DOCX file is empty or has no paragraphs.";

pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(extraction_error)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(extraction_error)?
        .read_to_string(&mut xml)
        .map_err(extraction_error)?;

    let (text, paragraphs) = flatten_document_xml(&xml)?;
    if paragraphs == 0 {
        return Err(IngestError::EmptyDocument(EMPTY_DOCX_MESSAGE));
    }
    Ok(text)
}

/// Returns the flattened text and the number of paragraphs seen.
fn flatten_document_xml(xml: &str) -> Result<(String, usize), IngestError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut paragraphs = 0;
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(extraction_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:p" => paragraphs += 1,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                // self-closing paragraph: counts, contributes a blank line
                b"w:p" => {
                    paragraphs += 1;
                    text.push('\n');
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                text.push_str(&t.unescape().map_err(extraction_error)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((text, paragraphs))
}

fn extraction_error(e: impl std::fmt::Display) -> IngestError {
    IngestError::Extraction {
        format: DocumentFormat::Docx,
        reason: e.to_string(),
    }
}
