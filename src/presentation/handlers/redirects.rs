use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::application::services::{
    legacy_audio_converter_redirect, locale_audio_converter_redirect,
    locale_media_processor_redirect,
};
use crate::domain::RedirectTarget;
use crate::presentation::config::RedirectStatus;
use crate::presentation::extractors::RequestLocale;
use crate::presentation::state::AppState;

use super::ApiError;

fn redirect_response(status: RedirectStatus, target: &RedirectTarget) -> Response {
    let location = target.to_string();
    match HeaderValue::try_from(location.as_str()) {
        Ok(value) => {
            tracing::debug!(status = %status.status_code(), location = %location, "Redirecting");
            (status.status_code(), [(header::LOCATION, value)]).into_response()
        }
        Err(e) => {
            ApiError::Internal(format!("Invalid redirect target {}: {}", location, e))
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn locale_audio_converter_handler(
    State(state): State<AppState>,
    locale: RequestLocale,
) -> Response {
    let target = locale_audio_converter_redirect(locale.as_locale());
    redirect_response(state.settings.routing.redirect_status, &target)
}

#[tracing::instrument(skip(state))]
pub async fn locale_media_processor_handler(
    State(state): State<AppState>,
    locale: RequestLocale,
) -> Response {
    let target = locale_media_processor_redirect(locale.as_locale());
    redirect_response(state.settings.routing.redirect_status, &target)
}

#[tracing::instrument(skip(state))]
pub async fn legacy_audio_converter_handler(State(state): State<AppState>) -> Response {
    redirect_response(
        state.settings.routing.redirect_status,
        &legacy_audio_converter_redirect(),
    )
}
