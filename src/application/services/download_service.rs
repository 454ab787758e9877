use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::FileSaveSink;
use crate::domain::{DownloadAnchor, DownloadRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// No payload was given; nothing happened.
    Skipped,
    /// The sink received exactly one click for this file name.
    Triggered { file_name: String },
    /// The sink would not allocate an object URL.
    Refused { file_name: String, reason: String },
}

impl DownloadOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadOutcome::Skipped => "skipped",
            DownloadOutcome::Triggered { .. } => "triggered",
            DownloadOutcome::Refused { .. } => "refused",
        }
    }
}

pub struct DownloadService {
    sink: Arc<dyn FileSaveSink>,
}

impl DownloadService {
    pub fn new(sink: Arc<dyn FileSaveSink>) -> Self {
        Self { sink }
    }

    pub async fn download_file(
        &self,
        result: Option<Bytes>,
        output_file_name: &str,
    ) -> DownloadOutcome {
        self.download(DownloadRequest::new(result, output_file_name))
            .await
    }

    /// Allocates one object URL, clicks one anchor, revokes the URL.
    ///
    /// Click and revoke failures are logged, never returned. The revoke runs
    /// even when the click fails.
    #[tracing::instrument(skip(self, request), fields(file_name = %request.file_name()))]
    pub async fn download(&self, request: DownloadRequest) -> DownloadOutcome {
        let (payload, file_name) = request.into_parts();

        let Some(payload) = payload else {
            tracing::debug!("No payload, nothing to save");
            return DownloadOutcome::Skipped;
        };

        let size = payload.len();
        let url = match self.sink.allocate_object_url(payload).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "Sink refused object url allocation");
                return DownloadOutcome::Refused {
                    file_name,
                    reason: e.to_string(),
                };
            }
        };

        let anchor = DownloadAnchor::new(url, file_name.as_str());
        if let Err(e) = self.sink.click(&anchor).await {
            tracing::warn!(error = %e, object_url = %url, "Save was not completed");
        }

        if let Err(e) = self.sink.revoke_object_url(&url).await {
            tracing::warn!(error = %e, object_url = %url, "Failed to revoke object url");
        }

        tracing::info!(size_bytes = size, "Download triggered");
        DownloadOutcome::Triggered { file_name }
    }
}
