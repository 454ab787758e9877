use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{FileSaveError, FileSaveSink};
use crate::presentation::config::{DownloadSettings, SaveSinkProvider};

use super::object_store_sink::ObjectStoreSaveSink;

pub struct SaveSinkFactory;

impl SaveSinkFactory {
    pub fn create(settings: &DownloadSettings) -> Result<Arc<dyn FileSaveSink>, FileSaveError> {
        match settings.provider {
            SaveSinkProvider::Local => {
                let sink = ObjectStoreSaveSink::local(PathBuf::from(&settings.local_path))?;
                tracing::info!(path = %settings.local_path, "Using local filesystem save sink");
                Ok(Arc::new(sink))
            }
            SaveSinkProvider::Memory => {
                tracing::info!("Using in-memory save sink");
                Ok(Arc::new(ObjectStoreSaveSink::in_memory()))
            }
        }
    }
}
