use bytes::Bytes;

/// A payload (possibly absent) paired with the name it should be saved under.
/// The file name is passed through as given.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    payload: Option<Bytes>,
    file_name: String,
}

impl DownloadRequest {
    pub fn new(payload: Option<Bytes>, file_name: impl Into<String>) -> Self {
        Self {
            payload,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn into_parts(self) -> (Option<Bytes>, String) {
        (self.payload, self.file_name)
    }
}
