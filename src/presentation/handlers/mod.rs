mod downloads;
mod error;
mod health;
mod pages;
mod redirects;

pub use downloads::{DownloadParams, DownloadResponse, download_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use pages::{loading_handler, media_processor_page_handler, type_safety_test_handler};
pub use redirects::{
    legacy_audio_converter_handler, locale_audio_converter_handler,
    locale_media_processor_handler,
};
