//! Filesystem document source

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use crate::config::StorageConfig;
use crate::error::{Error, Result};
use crate::types::{RawDocument, DEFAULT_CONTENT_TYPE};

use super::DocumentSource;

/// Reads documents from a directory, keyed by relative path
pub struct LocalDocumentSource {
    /// Directory storage keys are resolved against
    root: PathBuf,
}

impl LocalDocumentSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create from config
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.root.clone())
    }

    /// Resolve a storage key, refusing keys that escape the root
    fn resolve(&self, storage_key: &str) -> Result<PathBuf> {
        let key = Path::new(storage_key);
        if storage_key.is_empty() {
            return Err(Error::config("Storage key is empty"));
        }
        let escapes = key
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(Error::config(format!(
                "Storage key must be a relative path inside the storage root: {}",
                storage_key
            )));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl DocumentSource for LocalDocumentSource {
    async fn fetch(&self, storage_key: &str, content_type: Option<&str>) -> Result<RawDocument> {
        let path = self.resolve(storage_key)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::DocumentNotFound(storage_key.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let content_type = match content_type.map(str::trim).filter(|c| !c.is_empty()) {
            Some(content_type) => content_type.to_string(),
            None => mime_guess::from_path(&path)
                .first_raw()
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string(),
        };

        tracing::info!(
            "Downloaded document: {} bytes, type: {}",
            bytes.len(),
            content_type
        );

        Ok(RawDocument::new(bytes, content_type))
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentKind;

    #[tokio::test]
    async fn test_fetch_guesses_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("call.pdf"), b"%PDF-1.4").unwrap();
        std::fs::write(dir.path().join("notes"), b"plain").unwrap();

        let source = LocalDocumentSource::new(dir.path());
        let doc = source.fetch("call.pdf", None).await.unwrap();
        assert_eq!(doc.kind(), ContentKind::Pdf);
        assert_eq!(doc.bytes, b"%PDF-1.4");

        let doc = source.fetch("notes", None).await.unwrap();
        assert_eq!(doc.content_type, DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_override_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("upload.bin"), b"text").unwrap();

        let source = LocalDocumentSource::new(dir.path());
        let doc = source.fetch("upload.bin", Some("application/msword")).await.unwrap();
        assert_eq!(doc.kind(), ContentKind::Doc);

        let doc = source.fetch("upload.bin", Some(" ")).await.unwrap();
        assert_eq!(doc.kind(), ContentKind::Other);
    }

    #[tokio::test]
    async fn test_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalDocumentSource::new(dir.path());
        let err = source.fetch("absent.txt", None).await.unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(_)));
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let source = LocalDocumentSource::new("/tmp");
        for key in ["../etc/passwd", "/etc/passwd", "a/../../b", ""] {
            let err = source.fetch(key, None).await.unwrap_err();
            assert!(matches!(err, Error::Config(_)), "key {:?}", key);
        }
    }
}
