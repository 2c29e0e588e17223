mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::*;
use meeting_minutes::{create_router, AppState, IngestHandler, ListHandler, MAX_UPLOAD_BYTES};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

struct Fixture {
    storage: Arc<MemoryObjectStore>,
    transcriber: Arc<RecordingTranscriber>,
    app: axum::Router,
}

fn fixture() -> Fixture {
    fixture_serving(None)
}

fn fixture_serving(static_dir: Option<&Path>) -> Fixture {
    let storage = Arc::new(MemoryObjectStore::default());
    let transcriber = Arc::new(RecordingTranscriber::default());
    let summaries = Arc::new(MemorySummaryStore::with_records(
        1,
        vec![
            record("older", "2024-01-01T09:00:00.000000"),
            record("newer", "2024-01-02T09:00:00.000000"),
        ],
    ));

    let mut state = AppState::new(
        IngestHandler::new(storage.clone(), transcriber.clone(), BUCKET, "ja-JP"),
        ListHandler::new(summaries),
    );
    if let Some(dir) = static_dir {
        state = state.with_static_dir(dir);
    }

    Fixture {
        storage,
        transcriber,
        app: create_router(state),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let fx = fixture();

    let response = fx
        .app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_through_router() {
    let fx = fixture();
    let payload = webm_payload();
    let body = multipart_body(&[("audio", Some("local.webm"), &payload)]);

    let response = fx
        .app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/upload")
                .header(header::CONTENT_TYPE, multipart_content_type())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let json = body_json(response).await;
    assert_eq!(json["audioKey"], "raw_audio/local.webm");
    assert_eq!(
        fx.storage.object(BUCKET, "raw_audio/local.webm").unwrap().body.as_ref(),
        payload.as_slice()
    );
    assert_eq!(fx.transcriber.jobs().len(), 1);
}

#[tokio::test]
async fn test_upload_without_multipart_is_415() {
    let fx = fixture();

    let response = fx
        .app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/upload")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("hello"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(
        body_json(response).await["message"],
        "Unsupported Media Type. Expected multipart/form-data."
    );
}

#[tokio::test]
async fn test_upload_preflight() {
    let fx = fixture();

    let response = fx
        .app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/upload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "POST,OPTIONS"
    );
}

#[tokio::test]
async fn test_list_summaries_through_router() {
    let fx = fixture();

    let response = fx
        .app
        .oneshot(Request::builder().uri("/summaries").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let json = body_json(response).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["meeting_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["newer", "older"]);
}

#[tokio::test]
async fn test_oversized_upload_is_413_with_cors() {
    let fx = fixture();
    let body = vec![b'x'; MAX_UPLOAD_BYTES + 1024 * 1024];

    let response = fx
        .app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/upload")
                .header(header::CONTENT_TYPE, multipart_content_type())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(fx.storage.len(), 0);
    assert!(fx.transcriber.jobs().is_empty());
}

#[tokio::test]
async fn test_serves_browser_client() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<html><body><ul id=\"summariesList\"></ul></body></html>",
    )
    .unwrap();
    let fx = fixture_serving(Some(dir.path()));

    let response = fx
        .app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("summariesList"));
}

#[tokio::test]
async fn test_unknown_path_is_404_without_static_dir() {
    let fx = fixture();

    let response = fx
        .app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
