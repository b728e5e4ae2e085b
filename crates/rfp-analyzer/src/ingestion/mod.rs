//! Document text normalization with format-specific strategies

mod docx;
mod extractor;
mod pdf;
mod text;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, Result};

pub use docx::extract_docx_text;
pub use extractor::TextExtractor;
pub use pdf::{join_pages, LopdfStrategy, PdfExtractStrategy, PdfExtractor, PdfTextStrategy};
pub use text::decode_text;

/// Run a third-party parser, turning a panic into a parse error
///
/// docx-rs and lopdf both panic on some malformed inputs.
pub(crate) fn catch_parser_panic<T>(format: &str, parse: impl FnOnce() -> Result<T>) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(parse)) {
        Ok(result) => result,
        Err(payload) => Err(Error::file_parse(
            format,
            format!("parser panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_becomes_parse_error() {
        let result: Result<()> = catch_parser_panic("PDF", || panic!("object stream overflow"));
        match result {
            Err(Error::FileParse { format, message }) => {
                assert_eq!(format, "PDF");
                assert!(message.contains("object stream overflow"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_result_passes_through() {
        assert_eq!(catch_parser_panic("Word", || Ok(7)).unwrap(), 7);
        assert!(catch_parser_panic::<()>("Word", || Err(Error::file_parse("Word", "bad"))).is_err());
    }
}
