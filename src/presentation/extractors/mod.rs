mod request_locale;

pub use request_locale::RequestLocale;
