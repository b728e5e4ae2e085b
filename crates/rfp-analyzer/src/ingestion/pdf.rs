//! PDF text extraction strategies
//!
//! Two interchangeable strategies share the [`PdfTextStrategy`] contract:
//! a text-layer extractor backed by `pdf-extract` and a per-page layout
//! extractor backed by `lopdf`. Both return page texts in page order and
//! [`join_pages`] turns them into normalized text the same way.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::config::{ExtractionConfig, PdfBackend};
use crate::error::{Error, Result};

use super::catch_parser_panic;

/// A way of pulling per-page text out of a PDF
pub trait PdfTextStrategy: Send + Sync {
    /// Extract page texts in page order
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>>;

    /// Get strategy name for logging
    fn name(&self) -> &str;
}

/// Join page texts, each page followed by a newline
pub fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

/// Fast text-layer extraction using pdf-extract
///
/// pdf-extract can hang or panic on documents with unusual fonts, so each
/// run happens on a helper thread and is abandoned after `timeout`.
pub struct PdfExtractStrategy {
    timeout: Duration,
}

impl PdfExtractStrategy {
    /// Create a strategy with the given per-document timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for PdfExtractStrategy {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl PdfTextStrategy for PdfExtractStrategy {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        let data_vec = data.to_vec();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let result = pdf_extract::extract_text_from_mem_by_pages(&data_vec)
                .map_err(|e| e.to_string());
            let _ = tx.send(result);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(Ok(pages)) => {
                let _ = handle.join();
                Ok(pages)
            }
            Ok(Err(message)) => {
                let _ = handle.join();
                Err(Error::file_parse("PDF", message))
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // The thread cannot be killed; it is left to finish on its own
                Err(Error::file_parse(
                    "PDF",
                    format!("pdf-extract timed out after {}s", self.timeout.as_secs()),
                ))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                let _ = handle.join();
                Err(Error::file_parse("PDF", "pdf-extract thread panicked"))
            }
        }
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

/// Layout-based per-page extraction using lopdf
///
/// Pages that yield no text are skipped; page text is otherwise kept as
/// lopdf returns it.
#[derive(Default)]
pub struct LopdfStrategy;

impl PdfTextStrategy for LopdfStrategy {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        catch_parser_panic("PDF", || {
            let doc = lopdf::Document::load_mem(data)
                .map_err(|e| Error::file_parse("PDF", format!("Failed to load PDF: {}", e)))?;

            let mut pages = Vec::new();
            for page_number in doc.get_pages().keys() {
                match doc.extract_text(&[*page_number]) {
                    Ok(text) if !text.is_empty() => pages.push(text),
                    Ok(_) => {}
                    Err(e) => {
                        tracing::debug!("Could not extract text from page {}: {}", page_number, e);
                    }
                }
            }

            if pages.is_empty() {
                tracing::warn!("lopdf produced no text, PDF may be image-based");
            }

            Ok(pages)
        })
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}

/// PDF extractor combining a configured strategy with an optional fallback
pub struct PdfExtractor {
    primary: Box<dyn PdfTextStrategy>,
    fallback: Option<Box<dyn PdfTextStrategy>>,
}

impl PdfExtractor {
    /// Build the strategy pair described by the configuration
    pub fn from_config(config: &ExtractionConfig) -> Self {
        match config.pdf_backend {
            PdfBackend::PdfExtract => {
                let fallback: Option<Box<dyn PdfTextStrategy>> = if config.layout_fallback {
                    Some(Box::new(LopdfStrategy))
                } else {
                    None
                };
                Self {
                    primary: Box::new(PdfExtractStrategy::new(config.pdf_timeout())),
                    fallback,
                }
            }
            PdfBackend::Lopdf => Self {
                primary: Box::new(LopdfStrategy),
                fallback: None,
            },
        }
    }

    /// Build from explicit strategies
    pub fn with_strategies(
        primary: Box<dyn PdfTextStrategy>,
        fallback: Option<Box<dyn PdfTextStrategy>>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Name of the primary strategy
    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    /// Extract newline-joined page text
    ///
    /// Errors only when every available strategy failed. A strategy that
    /// panics counts as failed.
    pub fn extract_pdf_text(&self, data: &[u8]) -> Result<String> {
        let primary_err = match run_strategy(self.primary.as_ref(), data) {
            Ok(pages) => return Ok(join_pages(&pages)),
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            return Err(primary_err);
        };

        tracing::warn!(
            "{} failed: {}, trying {}",
            self.primary.name(),
            primary_err,
            fallback.name()
        );
        run_strategy(fallback.as_ref(), data).map(|pages| join_pages(&pages))
    }
}

fn run_strategy(strategy: &dyn PdfTextStrategy, data: &[u8]) -> Result<Vec<String>> {
    catch_parser_panic("PDF", || strategy.extract_pages(data))
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}
