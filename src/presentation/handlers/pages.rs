use axum::extract::State;
use axum::response::Html;

use crate::application::services::redirect_rules;
use crate::presentation::extractors::RequestLocale;
use crate::presentation::state::AppState;
use crate::presentation::views;

#[tracing::instrument(skip(state))]
pub async fn media_processor_page_handler(State(state): State<AppState>) -> Html<String> {
    Html(views::media_processor_shell(
        &state.default_locale,
        &state.settings.views.suspense_fallback_text,
    ))
}

#[tracing::instrument]
pub async fn type_safety_test_handler(locale: RequestLocale) -> Html<String> {
    let rules = redirect_rules(locale.as_locale());
    Html(views::type_safety_test_page(locale.as_locale(), &rules))
}

#[tracing::instrument]
pub async fn loading_handler(_locale: RequestLocale) -> Html<&'static str> {
    Html(views::loading_placeholder())
}
