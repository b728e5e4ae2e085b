//! Format-aware text normalization

use crate::config::ExtractionConfig;
use crate::types::{ContentKind, RawDocument};

use super::docx::extract_docx_text;
use super::pdf::PdfExtractor;
use super::text::decode_text;

/// Turns a raw payload into normalized text
///
/// Extraction never fails: a structured document that cannot be parsed is
/// decoded as plain text instead.
pub struct TextExtractor {
    pdf: PdfExtractor,
    preview_chars: usize,
}

impl TextExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            pdf: PdfExtractor::from_config(config),
            preview_chars: config.preview_chars,
        }
    }

    /// Create an extractor with a custom PDF extractor
    pub fn with_pdf_extractor(pdf: PdfExtractor, preview_chars: usize) -> Self {
        Self { pdf, preview_chars }
    }

    /// Extract normalized text from a raw document
    pub fn extract_document(&self, doc: &RawDocument) -> String {
        self.extract(&doc.bytes, &doc.content_type)
    }

    /// Extract normalized text from bytes labelled with a content type
    pub fn extract(&self, data: &[u8], content_type: &str) -> String {
        let kind = ContentKind::from_content_type(content_type);

        let structured = match kind {
            ContentKind::Pdf => Some(self.pdf.extract_pdf_text(data)),
            ContentKind::Docx | ContentKind::Doc => Some(extract_docx_text(data)),
            ContentKind::Other => None,
        };

        let text = match structured {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                tracing::warn!(
                    "{} extraction failed ({}), decoding as plain text",
                    kind.display_name(),
                    e
                );
                decode_text(data)
            }
            None => decode_text(data),
        };

        tracing::info!("Extracted {} characters of text", text.chars().count());
        tracing::debug!("Preview: {}...", preview(&text, self.preview_chars));

        text
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
