//! Lambda adapters: runtime events in, handler calls, runtime responses out.

mod events;

pub use events::{
    ApiGatewayRequest, ApiGatewayResponse, S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object,
    SummarizeAck,
};

use crate::handlers::{
    HandlerResponse, IngestHandler, ListHandler, SummarizeHandler, UploadRequest, LISTING_CORS,
    UPLOAD_CORS,
};
use bytes::Bytes;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::json;
use tracing::info;

impl From<HandlerResponse> for ApiGatewayResponse {
    fn from(response: HandlerResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response
                .headers
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            body: response.body,
        }
    }
}

impl From<&ApiGatewayRequest> for UploadRequest {
    fn from(request: &ApiGatewayRequest) -> Self {
        Self {
            content_type: request.header("content-type").map(str::to_owned),
            body: request
                .body
                .clone()
                .map(Bytes::from)
                .unwrap_or_default(),
            is_base64_encoded: request.is_base64_encoded.unwrap_or(false),
        }
    }
}

pub async fn handle_upload(
    event: LambdaEvent<ApiGatewayRequest>,
    handler: &IngestHandler,
) -> Result<ApiGatewayResponse, Error> {
    let request = event.payload;
    if request.is_preflight() {
        return Ok(HandlerResponse::preflight(&UPLOAD_CORS).into());
    }

    info!(
        "Upload request {} (base64={})",
        event.context.request_id,
        request.is_base64_encoded.unwrap_or(false)
    );

    Ok(handler.handle(&UploadRequest::from(&request)).await.into())
}

pub async fn handle_list(
    event: LambdaEvent<ApiGatewayRequest>,
    handler: &ListHandler,
) -> Result<ApiGatewayResponse, Error> {
    if event.payload.is_preflight() {
        return Ok(HandlerResponse::preflight(&LISTING_CORS).into());
    }

    Ok(handler.handle().await.into())
}

/// Failures propagate to the runtime so the platform's retry policy applies.
pub async fn handle_transcript_created(
    event: LambdaEvent<S3Event>,
    handler: &SummarizeHandler,
) -> Result<SummarizeAck, Error> {
    let saved = handler.handle(&event.payload).await?;

    info!("Saved {} summaries", saved.len());

    Ok(SummarizeAck {
        status_code: 200,
        body: json!({ "message": "Summary saved to DynamoDB." }).to_string(),
    })
}
