pub mod config;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use config::{Environment, RedirectStatus, Settings, SettingsError};
pub use router::create_router;
pub use state::AppState;
