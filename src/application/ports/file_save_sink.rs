use bytes::Bytes;

use crate::domain::{DownloadAnchor, ObjectUrl};

/// Platform capability behind the download helper: allocate a temporary URL
/// for a payload, act on a synthetic anchor click, release the URL.
#[async_trait::async_trait]
pub trait FileSaveSink: Send + Sync {
    async fn allocate_object_url(&self, payload: Bytes) -> Result<ObjectUrl, FileSaveError>;

    async fn click(&self, anchor: &DownloadAnchor) -> Result<(), FileSaveError>;

    async fn revoke_object_url(&self, url: &ObjectUrl) -> Result<(), FileSaveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileSaveError {
    #[error("object url allocation failed: {0}")]
    AllocationFailed(String),
    #[error("save refused: {0}")]
    Refused(String),
    #[error("object url not found: {0}")]
    UnknownObjectUrl(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
