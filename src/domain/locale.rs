use std::fmt;

/// Identifier selecting the language/region prefix of a route.
///
/// Only obtainable through [`SupportedLocales::resolve`], so every `Locale`
/// in circulation is one the service was configured to serve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported locale: {0}")]
    Unsupported(String),
    #[error("Malformed locale tag: {0:?}")]
    Malformed(String),
    #[error("At least one supported locale is required")]
    EmptySet,
}

/// The closed set of locales the routing layer accepts.
#[derive(Debug, Clone)]
pub struct SupportedLocales {
    locales: Vec<String>,
}

impl SupportedLocales {
    pub fn new<I, S>(locales: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for locale in locales {
            let locale = locale.into();
            if !is_well_formed(&locale) {
                return Err(LocaleError::Malformed(locale));
            }
            if !collected.contains(&locale) {
                collected.push(locale);
            }
        }

        if collected.is_empty() {
            return Err(LocaleError::EmptySet);
        }

        Ok(Self { locales: collected })
    }

    /// Matches a raw path segment against the configured set. Matching is
    /// exact: `EN` and `en` are different segments.
    pub fn resolve(&self, raw: &str) -> Result<Locale, LocaleError> {
        self.locales
            .iter()
            .find(|l| l.as_str() == raw)
            .map(|l| Locale(l.clone()))
            .ok_or_else(|| LocaleError::Unsupported(raw.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.iter().map(|l| Locale(l.clone()))
    }
}

// Locale tags end up in Location headers and URL paths unescaped.
fn is_well_formed(tag: &str) -> bool {
    !tag.is_empty()
        && tag.len() <= 35
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
