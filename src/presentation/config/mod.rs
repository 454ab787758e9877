mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DownloadSettings, LoggingSettings, RedirectStatus, RoutingSettings, SaveSinkProvider,
    ServerSettings, Settings, SettingsError, ViewSettings,
};
