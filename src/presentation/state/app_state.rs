use std::sync::Arc;

use crate::application::ports::FileSaveSink;
use crate::application::services::DownloadService;
use crate::domain::{Locale, LocaleError, SupportedLocales};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub download_service: Arc<DownloadService>,
    pub supported_locales: Arc<SupportedLocales>,
    pub default_locale: Locale,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings, sink: Arc<dyn FileSaveSink>) -> Result<Self, LocaleError> {
        let supported_locales = Arc::new(settings.supported_locales()?);
        let default_locale = settings.default_locale()?;
        Ok(Self {
            download_service: Arc::new(DownloadService::new(sink)),
            supported_locales,
            default_locale,
            settings,
        })
    }
}
