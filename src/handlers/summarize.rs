use crate::lambda::S3Event;
use crate::secrets::SecretStore;
use crate::storage::ObjectStore;
use crate::summaries::{created_at_now, SummaryRecord, SummaryStore};
use crate::summarizer::{Summarizer, SummarizerError};
use crate::transcribe::{TranscriptDocument, TranscriptError};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Notification contains no records")]
    NoRecords,

    #[error("Cannot derive a meeting id from key {0:?}")]
    InvalidKey(String),

    #[error("Failed to fetch transcript: {0:#}")]
    Fetch(anyhow::Error),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error("Failed to get summarization API key: {0:#}")]
    Secret(anyhow::Error),

    #[error(transparent)]
    Summarizer(#[from] SummarizerError),

    #[error("Failed to save summary: {0:#}")]
    Store(anyhow::Error),
}

/// Meeting id for a transcript key: the file name without its extension.
///
/// Folder placeholder keys (ending in `/`) have no file name.
pub fn meeting_id_from_key(key: &str) -> Option<String> {
    if key.ends_with('/') {
        return None;
    }

    Path::new(key)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
}

pub struct SummarizeHandler {
    storage: Arc<dyn ObjectStore>,
    secrets: Arc<dyn SecretStore>,
    summarizer: Arc<dyn Summarizer>,
    summaries: Arc<dyn SummaryStore>,
    api_key_parameter: String,
}

impl SummarizeHandler {
    pub fn new(
        storage: Arc<dyn ObjectStore>,
        secrets: Arc<dyn SecretStore>,
        summarizer: Arc<dyn Summarizer>,
        summaries: Arc<dyn SummaryStore>,
        api_key_parameter: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            secrets,
            summarizer,
            summaries,
            api_key_parameter: api_key_parameter.into(),
        }
    }

    /// Summarize every object in a creation notification, stopping at the
    /// first failure.
    pub async fn handle(&self, event: &S3Event) -> Result<Vec<SummaryRecord>, SummarizeError> {
        if event.records.is_empty() {
            return Err(SummarizeError::NoRecords);
        }

        let mut saved = Vec::with_capacity(event.records.len());
        for record in &event.records {
            let bucket = &record.s3.bucket.name;
            let key = record.s3.object.decoded_key();

            info!("Received S3 event for file: s3://{}/{}", bucket, key);

            match self.summarize_object(bucket, &key).await {
                Ok(summary) => saved.push(summary),
                Err(e) => {
                    error!("Summarization of s3://{}/{} failed: {}", bucket, key, e);
                    return Err(e);
                }
            }
        }

        Ok(saved)
    }

    /// Transcript object → summary record. Nothing is written unless every
    /// earlier step succeeded.
    pub async fn summarize_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<SummaryRecord, SummarizeError> {
        let meeting_id =
            meeting_id_from_key(key).ok_or_else(|| SummarizeError::InvalidKey(key.to_string()))?;

        let raw = self
            .storage
            .get_object(bucket, key)
            .await
            .map_err(SummarizeError::Fetch)?;
        let document = TranscriptDocument::from_slice(&raw)?;
        let transcript = document.text()?;

        info!(
            "Transcript fetched for {} ({} chars)",
            meeting_id,
            transcript.chars().count()
        );

        let api_key = self
            .secrets
            .get_secret(&self.api_key_parameter)
            .await
            .map_err(SummarizeError::Secret)?;

        let summary = self.summarizer.summarize(&api_key, transcript).await?;

        info!("Summary generated for {}", meeting_id);

        let record = SummaryRecord {
            meeting_id,
            summary,
            transcript_s3_key: key.to_string(),
            created_at: created_at_now(),
        };

        self.summaries
            .put(&record)
            .await
            .map_err(SummarizeError::Store)?;

        Ok(record)
    }
}
