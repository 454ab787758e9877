use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::domain::Locale;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

/// The `{locale}` path segment, already checked against the supported set.
#[derive(Debug, Clone)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
    pub fn as_locale(&self) -> &Locale {
        &self.0
    }
}

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let locale = state.supported_locales.resolve(&raw).map_err(|e| {
            tracing::debug!(locale = %raw, "Rejected unsupported locale");
            ApiError::NotFound(e.to_string())
        })?;

        Ok(Self(locale))
    }
}
