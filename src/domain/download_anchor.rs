use super::object_url::ObjectUrl;

/// Transient, never-rendered link whose click hands the payload to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAnchor {
    href: ObjectUrl,
    download: String,
}

impl DownloadAnchor {
    pub fn new(href: ObjectUrl, download: impl Into<String>) -> Self {
        Self {
            href,
            download: download.into(),
        }
    }

    pub fn href(&self) -> &ObjectUrl {
        &self.href
    }

    pub fn download(&self) -> &str {
        &self.download
    }
}
