use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    download_handler, health_handler, legacy_audio_converter_handler, loading_handler,
    locale_audio_converter_handler, locale_media_processor_handler, media_processor_page_handler,
    type_safety_test_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_payload = state.settings.downloads.max_payload_bytes();

    Router::new()
        .route("/health", get(health_handler))
        .route("/audio-converter", get(legacy_audio_converter_handler))
        .route("/media-processor", get(media_processor_page_handler))
        .route(
            "/{locale}/audio-converter",
            get(locale_audio_converter_handler),
        )
        .route(
            "/{locale}/media-processor",
            get(locale_media_processor_handler),
        )
        .route("/{locale}/type-safety-test", get(type_safety_test_handler))
        .route("/{locale}/loading", get(loading_handler))
        .route(
            "/api/v1/downloads",
            post(download_handler).layer(DefaultBodyLimit::max(max_payload)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
