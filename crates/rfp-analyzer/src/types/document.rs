//! Raw document payloads and content-type classification

/// Content type used when the source does not supply one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Document formats the text extractor distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
    /// Old Microsoft Word document (.doc)
    Doc,
    /// Anything else, decoded as plain text
    Other,
}

impl ContentKind {
    /// Classify a content-type label
    ///
    /// Only the essence (`type/subtype`) is compared, case-insensitively, so
    /// parameters such as `; charset=utf-8` do not change the result.
    pub fn from_content_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Self::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Self::Docx,
            "application/msword" => Self::Doc,
            _ => Self::Other,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
            Self::Doc => "Word Document (.doc)",
            Self::Other => "Plain text",
        }
    }
}

/// A document payload as handed over by the document source
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Raw bytes
    pub bytes: Vec<u8>,
    /// Content-type label
    pub content_type: String,
}

impl RawDocument {
    /// Create a raw document; an empty label becomes `application/octet-stream`
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        let content_type = if content_type.trim().is_empty() {
            DEFAULT_CONTENT_TYPE.to_string()
        } else {
            content_type
        };
        Self { bytes, content_type }
    }

    /// Classified content kind
    pub fn kind(&self) -> ContentKind {
        ContentKind::from_content_type(&self.content_type)
    }
}
