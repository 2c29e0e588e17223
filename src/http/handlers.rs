use super::state::AppState;
use crate::handlers::{HandlerResponse, UploadRequest, LISTING_CORS, UPLOAD_CORS};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(*name, value.as_str());
        }

        builder.body(Body::from(self.body)).unwrap_or_else(|e| {
            error!("Failed to build response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
    }
}

/// POST /upload
/// Raw (not base64) multipart body
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResponse {
    let request = UploadRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body,
        is_base64_encoded: false,
    };

    state.ingest.handle(&request).await
}

/// OPTIONS /upload
pub async fn upload_preflight() -> HandlerResponse {
    HandlerResponse::preflight(&UPLOAD_CORS)
}

/// GET /summaries
pub async fn list_summaries(State(state): State<AppState>) -> HandlerResponse {
    state.listing.handle().await
}

/// OPTIONS /summaries
pub async fn summaries_preflight() -> HandlerResponse {
    HandlerResponse::preflight(&LISTING_CORS)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
