mod download_service;
mod redirect_service;

pub use download_service::{DownloadOutcome, DownloadService};
pub use redirect_service::{
    RedirectRule, legacy_audio_converter_redirect, locale_audio_converter_redirect,
    locale_media_processor_redirect, redirect_rules,
};
