use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::TryStreamExt;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FileSaveError, FileSaveSink};
use crate::domain::{DownloadAnchor, ObjectUrl};

const STAGING_PREFIX: &str = "staging";
const SAVED_PREFIX: &str = "saved";

/// Sink that stages payloads in an object store and "saves" them by copying
/// the staged object to the anchor's download name.
///
/// Staged payloads live under `staging/`, saved files under `saved/`. A
/// download name can never address a staged object.
pub struct ObjectStoreSaveSink {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectStoreSaveSink {
    pub fn local(base_path: PathBuf) -> Result<Self, FileSaveError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| FileSaveError::AllocationFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
        }
    }

    /// Reads back a saved file by its download name.
    pub async fn fetch(&self, file_name: &str) -> Result<Bytes, FileSaveError> {
        let result = self
            .inner
            .get(&Self::saved_path(file_name))
            .await
            .map_err(|e| FileSaveError::Refused(e.to_string()))?;

        result
            .bytes()
            .await
            .map_err(|e| FileSaveError::Refused(e.to_string()))
    }

    /// Number of payloads currently holding an object URL.
    pub async fn staged_count(&self) -> Result<usize, FileSaveError> {
        let prefix = StorePath::from(STAGING_PREFIX);
        let staged: Vec<_> = self
            .inner
            .list(Some(&prefix))
            .try_collect()
            .await
            .map_err(|e| FileSaveError::AllocationFailed(e.to_string()))?;
        Ok(staged.len())
    }

    fn staging_path(url: &ObjectUrl) -> StorePath {
        StorePath::from(format!("{}/{}", STAGING_PREFIX, url.as_uuid().simple()))
    }

    fn saved_path(file_name: &str) -> StorePath {
        let relative = StorePath::from(file_name);
        StorePath::from(SAVED_PREFIX)
            .parts()
            .chain(relative.parts())
            .collect()
    }
}

#[async_trait::async_trait]
impl FileSaveSink for ObjectStoreSaveSink {
    async fn allocate_object_url(&self, payload: Bytes) -> Result<ObjectUrl, FileSaveError> {
        let url = ObjectUrl::new();
        self.inner
            .put(&Self::staging_path(&url), PutPayload::from(payload))
            .await
            .map_err(|e| FileSaveError::AllocationFailed(e.to_string()))?;
        Ok(url)
    }

    async fn click(&self, anchor: &DownloadAnchor) -> Result<(), FileSaveError> {
        if StorePath::from(anchor.download()).parts().next().is_none() {
            return Err(FileSaveError::Refused(format!(
                "unusable file name: {:?}",
                anchor.download()
            )));
        }

        self.inner
            .copy(
                &Self::staging_path(anchor.href()),
                &Self::saved_path(anchor.download()),
            )
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    FileSaveError::UnknownObjectUrl(anchor.href().to_string())
                }
                other => FileSaveError::Refused(other.to_string()),
            })
    }

    async fn revoke_object_url(&self, url: &ObjectUrl) -> Result<(), FileSaveError> {
        self.inner
            .delete(&Self::staging_path(url))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    FileSaveError::UnknownObjectUrl(url.to_string())
                }
                other => FileSaveError::Refused(other.to_string()),
            })
    }
}
