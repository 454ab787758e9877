use std::sync::Arc;

use bytes::Bytes;

use mediaroute::application::ports::FileSaveSink;
use mediaroute::application::services::{DownloadOutcome, DownloadService};
use mediaroute::domain::DownloadRequest;
use mediaroute::infrastructure::storage::{RecordingSaveSink, SinkCall};

fn service_with(sink: &Arc<RecordingSaveSink>) -> DownloadService {
    let sink: Arc<dyn FileSaveSink> = Arc::clone(sink) as Arc<dyn FileSaveSink>;
    DownloadService::new(sink)
}

#[tokio::test]
async fn given_no_payload_when_downloading_then_sink_is_untouched() {
    let sink = Arc::new(RecordingSaveSink::new());
    let service = service_with(&sink);

    let outcome = service.download_file(None, "anything.mp4").await;

    assert_eq!(outcome, DownloadOutcome::Skipped);
    assert!(sink.calls().await.is_empty());
}

#[tokio::test]
async fn given_payload_when_downloading_then_allocates_clicks_and_revokes_once() {
    let sink = Arc::new(RecordingSaveSink::new());
    let service = service_with(&sink);

    let outcome = service
        .download_file(Some(Bytes::from_static(b"fake mp4")), "clip.mp4")
        .await;

    assert_eq!(
        outcome,
        DownloadOutcome::Triggered {
            file_name: "clip.mp4".to_string()
        }
    );

    let calls = sink.calls().await;
    assert_eq!(calls.len(), 3);

    let SinkCall::Allocate { url, size } = calls[0] else {
        panic!("expected allocate first, got {:?}", calls[0]);
    };
    assert_eq!(size, 8);
    assert_eq!(
        calls[1],
        SinkCall::Click {
            href: url,
            download: "clip.mp4".to_string()
        }
    );
    assert_eq!(calls[2], SinkCall::Revoke { url });
}

#[tokio::test]
async fn given_blocked_click_when_downloading_then_url_is_still_revoked() {
    let sink = Arc::new(RecordingSaveSink::refusing_clicks());
    let service = service_with(&sink);

    let outcome = service
        .download_file(Some(Bytes::from_static(b"data")), "blocked.wav")
        .await;

    assert_eq!(outcome.as_str(), "triggered");
    let calls = sink.calls().await;
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[2], SinkCall::Revoke { .. }));
}

#[tokio::test]
async fn given_refused_allocation_when_downloading_then_nothing_is_clicked() {
    let sink = Arc::new(RecordingSaveSink::refusing_allocations());
    let service = service_with(&sink);

    let outcome = service
        .download_file(Some(Bytes::from_static(b"data")), "clip.mp4")
        .await;

    assert!(matches!(
        outcome,
        DownloadOutcome::Refused { ref file_name, .. } if file_name == "clip.mp4"
    ));
    assert!(sink.calls().await.is_empty());
}

#[tokio::test]
async fn given_unusual_file_name_when_downloading_then_name_is_passed_through() {
    let sink = Arc::new(RecordingSaveSink::new());
    let service = service_with(&sink);

    let request = DownloadRequest::new(Some(Bytes::from_static(b"x")), "my clip (1).MP4");
    service.download(request).await;

    let calls = sink.calls().await;
    assert!(matches!(
        &calls[1],
        SinkCall::Click { download, .. } if download == "my clip (1).MP4"
    ));
}
