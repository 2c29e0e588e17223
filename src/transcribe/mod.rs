//! Speech-to-text transcription jobs and the documents they produce.
//!
//! Jobs are fire-and-forget: completion is only observed when the result
//! document lands under `transcripts/` and triggers summarization.

mod aws;
mod document;

pub use aws::AwsTranscriber;
pub use document::{TranscriptDocument, TranscriptError};

use crate::storage::{object_uri, TRANSCRIPTS_PREFIX};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Prefix of every transcription job name
pub const JOB_NAME_PREFIX: &str = "meeting-transcript-";

/// A transcription job request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionJob {
    /// Unique job name, e.g. `meeting-transcript-20240101120000`
    pub job_name: String,

    /// Locale of the spoken audio (e.g. `ja-JP`)
    pub language_code: String,

    /// `s3://` URI of the audio object
    pub media_uri: String,

    pub output_bucket: String,

    /// `transcripts/<job_name>.json`
    pub output_key: String,
}

impl TranscriptionJob {
    /// Job for an audio object, writing its output back into the same bucket.
    pub fn for_audio(job_name: String, bucket: &str, audio_key: &str, language_code: &str) -> Self {
        let output_key = format!("{}{}.json", TRANSCRIPTS_PREFIX, job_name);

        Self {
            job_name,
            language_code: language_code.to_string(),
            media_uri: object_uri(bucket, audio_key),
            output_bucket: bucket.to_string(),
            output_key,
        }
    }
}

/// Second-resolution job name. Two uploads in the same second share a name.
pub fn job_name_at(now: DateTime<Utc>) -> String {
    format!("{}{}", JOB_NAME_PREFIX, timestamp_slug(now))
}

/// `YYYYmmddHHMMSS`, used in job names and default file names
pub fn timestamp_slug(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

/// Starts asynchronous transcription jobs
#[async_trait::async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<()>;
}
