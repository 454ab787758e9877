mod download_anchor;
mod download_request;
mod locale;
mod object_url;
mod processor_selection;
mod redirect_target;

pub use download_anchor::DownloadAnchor;
pub use download_request::DownloadRequest;
pub use locale::{Locale, LocaleError, SupportedLocales};
pub use object_url::ObjectUrl;
pub use processor_selection::ProcessorSelection;
pub use redirect_target::RedirectTarget;
