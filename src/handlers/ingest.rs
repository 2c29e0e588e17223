use super::multipart::extract_audio;
use super::response::{HandlerResponse, UPLOAD_CORS};
use crate::storage::{ObjectStore, AUDIO_CONTENT_TYPE, RAW_AUDIO_PREFIX};
use crate::transcribe::{job_name_at, timestamp_slug, TranscriptionJob, TranscriptionService};
use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Why an upload could not be ingested.
///
/// Only `EmptyBody` and `UnsupportedMediaType` are reported as client errors;
/// malformed multipart input still answers 500 (see `status_code`).
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Request body is empty.")]
    EmptyBody,

    #[error("Unsupported Media Type. Expected multipart/form-data.")]
    UnsupportedMediaType(Option<String>),

    #[error("Request body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Boundary not found in Content-Type header.")]
    MissingBoundary,

    #[error("Audio part not found in multipart body.")]
    MissingAudioPart,

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] multer::Error),

    #[error("Failed to store audio: {0:#}")]
    Storage(anyhow::Error),

    #[error("Failed to start transcription: {0:#}")]
    Transcription(anyhow::Error),
}

impl IngestError {
    pub fn status_code(&self) -> u16 {
        match self {
            IngestError::EmptyBody => 400,
            IngestError::UnsupportedMediaType(_) => 415,
            _ => 500,
        }
    }

    /// The request itself was unusable (as opposed to a downstream failure)
    pub fn is_malformed_upload(&self) -> bool {
        matches!(
            self,
            IngestError::Base64(_)
                | IngestError::MissingBoundary
                | IngestError::MissingAudioPart
                | IngestError::Multipart(_)
        )
    }

    fn to_response(&self) -> HandlerResponse {
        match self.status_code() {
            500 => HandlerResponse::internal_error(&self.to_string(), &UPLOAD_CORS),
            status => HandlerResponse::json(
                status,
                &json!({ "message": self.to_string() }),
                &UPLOAD_CORS,
            ),
        }
    }
}

/// An upload as received from the HTTP front end
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub content_type: Option<String>,
    pub body: Bytes,
    /// Body is base64 text (API Gateway binary payloads)
    pub is_base64_encoded: bool,
}

impl UploadRequest {
    fn decoded_body(&self) -> Result<Bytes, IngestError> {
        if self.is_base64_encoded {
            let decoded = base64::engine::general_purpose::STANDARD.decode(&self.body)?;
            Ok(Bytes::from(decoded))
        } else {
            Ok(self.body.clone())
        }
    }
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReceipt {
    pub job_name: String,
    pub audio_key: String,
}

pub struct IngestHandler {
    storage: Arc<dyn ObjectStore>,
    transcriber: Arc<dyn TranscriptionService>,
    bucket: String,
    language_code: String,
}

impl IngestHandler {
    pub fn new(
        storage: Arc<dyn ObjectStore>,
        transcriber: Arc<dyn TranscriptionService>,
        bucket: impl Into<String>,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            transcriber,
            bucket: bucket.into(),
            language_code: language_code.into(),
        }
    }

    /// Run the upload pipeline and render the HTTP response
    pub async fn handle(&self, request: &UploadRequest) -> HandlerResponse {
        info!("Upload received ({} body bytes)", request.body.len());

        match self.ingest(request).await {
            Ok(receipt) => {
                info!("Upload finished: job {}", receipt.job_name);
                HandlerResponse::json(
                    200,
                    &json!({
                        "message": "Audio uploaded and transcription job started successfully.",
                        "jobName": receipt.job_name,
                        "audioKey": receipt.audio_key,
                    }),
                    &UPLOAD_CORS,
                )
            }
            Err(e) => {
                error!(
                    "Upload failed (status={}, malformed={}): {}",
                    e.status_code(),
                    e.is_malformed_upload(),
                    e
                );
                e.to_response()
            }
        }
    }

    pub async fn ingest(&self, request: &UploadRequest) -> Result<IngestReceipt, IngestError> {
        self.ingest_at(request, Utc::now()).await
    }

    /// Same as `ingest`, with the clock supplied by the caller
    pub async fn ingest_at(
        &self,
        request: &UploadRequest,
        now: DateTime<Utc>,
    ) -> Result<IngestReceipt, IngestError> {
        if request.body.is_empty() {
            return Err(IngestError::EmptyBody);
        }

        // Decoding comes first: an undecodable body fails before the media type is looked at
        let body = request.decoded_body()?;

        let content_type = request
            .content_type
            .as_deref()
            .filter(|ct| ct.contains(MULTIPART_FORM_DATA))
            .ok_or_else(|| IngestError::UnsupportedMediaType(request.content_type.clone()))?;

        let upload = extract_audio(content_type, body).await?;

        let file_name = upload
            .file_name
            .unwrap_or_else(|| format!("recorded-audio-{}.webm", timestamp_slug(now)));

        info!("Parsed file: {}, size: {} bytes", file_name, upload.data.len());

        let audio_key = format!("{}{}", RAW_AUDIO_PREFIX, file_name);
        self.storage
            .put_object(&self.bucket, &audio_key, upload.data, AUDIO_CONTENT_TYPE)
            .await
            .map_err(IngestError::Storage)?;

        let job = TranscriptionJob::for_audio(
            job_name_at(now),
            &self.bucket,
            &audio_key,
            &self.language_code,
        );
        self.transcriber
            .start_job(&job)
            .await
            .map_err(IngestError::Transcription)?;

        Ok(IngestReceipt {
            job_name: job.job_name,
            audio_key,
        })
    }
}
