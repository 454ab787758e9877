use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use mediaroute::application::ports::FileSaveSink;
use mediaroute::infrastructure::storage::{RecordingSaveSink, SinkCall};
use mediaroute::presentation::{AppState, Settings, create_router};

fn test_settings() -> Settings {
    Settings::defaults().unwrap()
}

fn create_test_app_with(settings: Settings, sink: Arc<RecordingSaveSink>) -> axum::Router {
    let sink: Arc<dyn FileSaveSink> = sink as Arc<dyn FileSaveSink>;
    create_router(AppState::new(settings, sink).unwrap())
}

fn create_test_app() -> axum::Router {
    create_test_app_with(test_settings(), Arc::new(RecordingSaveSink::new()))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let response = get(create_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"healthy\""));
}

#[tokio::test]
async fn given_en_locale_when_requesting_audio_converter_then_redirects_to_audio_extract() {
    let response = get(create_test_app(), "/en/audio-converter").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/en/media-processor?category=video&function=audio-extract"
    );
}

#[tokio::test]
async fn given_ja_locale_when_requesting_media_processor_then_redirects_to_audio_convert() {
    let response = get(create_test_app(), "/ja/media-processor").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/ja/processor/audio/convert");
}

#[tokio::test]
async fn given_legacy_path_when_requesting_audio_converter_then_redirects_without_locale() {
    let response = get(create_test_app(), "/audio-converter").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/media-processor?category=video&function=audio-extract"
    );
}

#[tokio::test]
async fn given_every_default_locale_when_requesting_audio_converter_then_target_is_prefixed() {
    for locale in test_settings().routing.supported_locales {
        let response = get(create_test_app(), &format!("/{}/audio-converter", locale)).await;
        assert_eq!(
            location(&response),
            format!("/{}/media-processor?category=video&function=audio-extract", locale)
        );
    }
}

#[tokio::test]
async fn given_unsupported_locale_when_requesting_redirect_then_returns_not_found() {
    let response = get(create_test_app(), "/xx/audio-converter").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert!(
        body_string(response)
            .await
            .contains("Unsupported locale: xx")
    );
}

#[tokio::test]
async fn given_found_status_configured_when_redirecting_then_uses_302() {
    let config = Settings::base_builder()
        .unwrap()
        .set_override("routing.redirect_status", 302_i64)
        .unwrap()
        .build()
        .unwrap();
    let settings = Settings::from_config(config).unwrap();
    let app = create_test_app_with(settings, Arc::new(RecordingSaveSink::new()));

    let response = get(app, "/audio-converter").await;

    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn given_media_processor_page_when_requested_then_renders_loading_fallback() {
    let response = get(create_test_app(), "/media-processor").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<p data-suspense-fallback>Loading...</p>"));
}

#[tokio::test]
async fn given_locale_when_requesting_type_safety_test_then_renders_diagnostic_page() {
    let response = get(create_test_app(), "/fr/type-safety-test").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Type Safety Test"));
    assert!(body.contains(r#"<html lang="fr">"#));
}

#[tokio::test]
async fn given_locale_when_requesting_loading_then_renders_spinner() {
    let response = get(create_test_app(), "/de/loading").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("animate-spin"));
}

#[tokio::test]
async fn given_payload_when_posting_download_then_sink_saves_under_file_name() {
    let sink = Arc::new(RecordingSaveSink::new());
    let app = create_test_app_with(test_settings(), Arc::clone(&sink));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/downloads?file_name=clip.mp4")
                .body(Body::from("binary"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "triggered");
    assert_eq!(body["file_name"], "clip.mp4");

    let calls = sink.calls().await;
    assert_eq!(calls.len(), 3);
    assert!(matches!(
        &calls[1],
        SinkCall::Click { download, .. } if download == "clip.mp4"
    ));
}

#[tokio::test]
async fn given_absent_flag_when_posting_download_then_nothing_is_saved() {
    let sink = Arc::new(RecordingSaveSink::new());
    let app = create_test_app_with(test_settings(), Arc::clone(&sink));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/downloads?file_name=anything.mp4&absent=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"skipped\""));
    assert!(sink.calls().await.is_empty());
}

#[tokio::test]
async fn given_missing_file_name_when_posting_download_then_returns_bad_request() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/downloads")
                .body(Body::from("binary"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("file_name"));
}

#[tokio::test]
async fn given_empty_body_without_absent_flag_when_posting_download_then_empty_file_is_saved() {
    let sink = Arc::new(RecordingSaveSink::new());
    let app = create_test_app_with(test_settings(), Arc::clone(&sink));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/downloads?file_name=empty.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"triggered\""));

    let calls = sink.calls().await;
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], SinkCall::Allocate { size: 0, .. }));
}

#[tokio::test]
async fn given_media_processor_page_when_requested_then_uses_default_locale_as_lang() {
    let config = Settings::base_builder()
        .unwrap()
        .set_override("routing.default_locale", "ja")
        .unwrap()
        .build()
        .unwrap();
    let settings = Settings::from_config(config).unwrap();
    let app = create_test_app_with(settings, Arc::new(RecordingSaveSink::new()));

    let body = body_string(get(app, "/media-processor").await).await;

    assert!(body.contains(r#"<html lang="ja">"#));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/audio-converter")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
