use bytes::Bytes;
use tokio::sync::Mutex;

use crate::application::ports::{FileSaveError, FileSaveSink};
use crate::domain::{DownloadAnchor, ObjectUrl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Allocate { url: ObjectUrl, size: usize },
    Click { href: ObjectUrl, download: String },
    Revoke { url: ObjectUrl },
}

/// Records every capability call in order. Can be told to fail allocations
/// or clicks.
#[derive(Default)]
pub struct RecordingSaveSink {
    calls: Mutex<Vec<SinkCall>>,
    refuse_allocations: bool,
    refuse_clicks: bool,
}

impl RecordingSaveSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing_allocations() -> Self {
        Self {
            refuse_allocations: true,
            ..Self::default()
        }
    }

    pub fn refusing_clicks() -> Self {
        Self {
            refuse_clicks: true,
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl FileSaveSink for RecordingSaveSink {
    async fn allocate_object_url(&self, payload: Bytes) -> Result<ObjectUrl, FileSaveError> {
        if self.refuse_allocations {
            return Err(FileSaveError::AllocationFailed(
                "allocation disabled".to_string(),
            ));
        }
        let url = ObjectUrl::new();
        self.calls.lock().await.push(SinkCall::Allocate {
            url,
            size: payload.len(),
        });
        Ok(url)
    }

    async fn click(&self, anchor: &DownloadAnchor) -> Result<(), FileSaveError> {
        self.calls.lock().await.push(SinkCall::Click {
            href: *anchor.href(),
            download: anchor.download().to_string(),
        });
        if self.refuse_clicks {
            return Err(FileSaveError::Refused("click blocked".to_string()));
        }
        Ok(())
    }

    async fn revoke_object_url(&self, url: &ObjectUrl) -> Result<(), FileSaveError> {
        self.calls.lock().await.push(SinkCall::Revoke { url: *url });
        Ok(())
    }
}
