//! Document retrieval seam
//!
//! The analyzer only needs a byte payload and a content-type label for a
//! storage key. Object-store clients live outside this crate; the local
//! filesystem source covers jobs that stage documents on disk.

mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RawDocument;

pub use local::LocalDocumentSource;

/// Trait for fetching raw documents by storage key
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the document stored under `storage_key`
    ///
    /// `content_type` overrides whatever label the source would assign.
    async fn fetch(&self, storage_key: &str, content_type: Option<&str>) -> Result<RawDocument>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
