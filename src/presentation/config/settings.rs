use std::collections::HashMap;
use std::path::Path;

use axum::http::StatusCode;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde::Deserialize;

use crate::domain::{Locale, LocaleError, SupportedLocales};

use super::Environment;

const DEFAULT_LOCALES: [&str; 8] = ["en", "ja", "zh", "ko", "es", "fr", "de", "pt"];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub routing: RoutingSettings,
    pub views: ViewSettings,
    pub downloads: DownloadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSettings {
    pub redirect_status: RedirectStatus,
    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<String>,
    pub default_locale: String,
}

// Kept out of the builder defaults: config merges arrays from later sources
// element by element, so a shorter env list would inherit trailing defaults.
fn default_supported_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewSettings {
    pub suspense_fallback_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadSettings {
    pub provider: SaveSinkProvider,
    pub local_path: String,
    pub max_payload_mb: usize,
}

impl DownloadSettings {
    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveSinkProvider {
    Local,
    Memory,
}

/// HTTP status used for every redirect the router issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u16")]
pub enum RedirectStatus {
    MovedPermanently,
    Found,
    SeeOther,
    TemporaryRedirect,
    PermanentRedirect,
}

impl RedirectStatus {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RedirectStatus::MovedPermanently => StatusCode::MOVED_PERMANENTLY,
            RedirectStatus::Found => StatusCode::FOUND,
            RedirectStatus::SeeOther => StatusCode::SEE_OTHER,
            RedirectStatus::TemporaryRedirect => StatusCode::TEMPORARY_REDIRECT,
            RedirectStatus::PermanentRedirect => StatusCode::PERMANENT_REDIRECT,
        }
    }
}

impl TryFrom<u16> for RedirectStatus {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            301 => Ok(Self::MovedPermanently),
            302 => Ok(Self::Found),
            303 => Ok(Self::SeeOther),
            307 => Ok(Self::TemporaryRedirect),
            308 => Ok(Self::PermanentRedirect),
            other => Err(format!(
                "Unsupported redirect status: {}. Expected one of 301, 302, 303, 307, 308",
                other
            )),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid routing settings: {0}")]
    Locales(#[from] LocaleError),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl Settings {
    /// Defaults, then `appsettings.{env}` if present, then `APP_` variables
    /// (`APP_SERVER__PORT=8080`, `APP_ROUTING__SUPPORTED_LOCALES=en,ja`).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(Path::new("."), environment, None)
    }

    /// Same layering as [`Settings::load`], reading the settings file from
    /// `dir`. `vars` replaces the process environment when given.
    pub fn load_from(
        dir: &Path,
        environment: Environment,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let file_name = dir.join(environment.settings_file());
        let config = Self::base_builder()?
            .add_source(File::with_name(&file_name.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("routing.supported_locales")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        Self::from_config(config)
    }

    pub fn defaults() -> Result<Self, SettingsError> {
        Self::from_config(Self::base_builder()?.build()?)
    }

    pub fn base_builder() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("routing.redirect_status", 303_i64)?
            .set_default("routing.default_locale", "en")?
            .set_default("views.suspense_fallback_text", "Loading...")?
            .set_default("downloads.provider", "local")?
            .set_default("downloads.local_path", "./downloads")?
            .set_default("downloads.max_payload_mb", 256_i64)?)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.default_locale()?;

        if self.downloads.max_payload_mb == 0 {
            return Err(SettingsError::Invalid(
                "downloads.max_payload_mb must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn supported_locales(&self) -> Result<SupportedLocales, LocaleError> {
        SupportedLocales::new(self.routing.supported_locales.iter().cloned())
    }

    /// Locale for pages reached without a locale segment. Must be one of
    /// the supported locales.
    pub fn default_locale(&self) -> Result<Locale, LocaleError> {
        self.supported_locales()?
            .resolve(&self.routing.default_locale)
    }
}
