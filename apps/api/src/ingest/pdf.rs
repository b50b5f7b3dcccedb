//! PDF text extraction.

use lopdf::Document;

use crate::ingest::{DocumentFormat, IngestError};

pub const EMPTY_PDF_MESSAGE: &str = "The PDF file is empty or has no pages.";

/// Extracts the text of every page. A PDF without pages is an
/// [`IngestError::EmptyDocument`], distinct from a file that fails to parse.
pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let document = Document::load_mem(bytes).map_err(extraction_error)?;
    if document.get_pages().is_empty() {
        return Err(IngestError::EmptyDocument(EMPTY_PDF_MESSAGE));
    }

    pdf_extract::extract_text_from_mem(bytes).map_err(extraction_error)
}

fn extraction_error(e: impl std::fmt::Display) -> IngestError {
    IngestError::Extraction {
        format: DocumentFormat::Pdf,
        reason: e.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    pub(crate) fn zero_page_pdf() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    /// Single US-letter page showing `text` in Courier.
    pub(crate) fn one_page_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_extracts_page_text() {
        let text = extract_text(&one_page_pdf("Backend Python Engineer")).unwrap();
        for word in ["Backend", "Python", "Engineer"] {
            assert!(text.contains(word), "{word} missing from {text:?}");
        }
    }

    #[test]
    fn test_zero_page_pdf_is_empty_document() {
        let err = extract_text(&zero_page_pdf()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyDocument(_)));
        assert_eq!(err.to_string(), EMPTY_PDF_MESSAGE);
    }

    #[test]
    fn test_garbage_bytes_are_extraction_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(
            err,
            IngestError::Extraction {
                format: DocumentFormat::Pdf,
                ..
            }
        ));
    }
}
