use super::{TranscriptionJob, TranscriptionService};
use anyhow::{Context, Result};
use aws_sdk_transcribe::types::{LanguageCode, Media};
use aws_sdk_transcribe::Client;
use tracing::info;

/// Amazon Transcribe backend
pub struct AwsTranscriber {
    client: Client,
}

impl AwsTranscriber {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TranscriptionService for AwsTranscriber {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<()> {
        let media = Media::builder().media_file_uri(&job.media_uri).build();

        self.client
            .start_transcription_job()
            .transcription_job_name(&job.job_name)
            .language_code(LanguageCode::from(job.language_code.as_str()))
            .media(media)
            .output_bucket_name(&job.output_bucket)
            .output_key(&job.output_key)
            .send()
            .await
            .with_context(|| format!("Failed to start transcription job {}", job.job_name))?;

        info!(
            "Started transcription job {} ({} -> s3://{}/{})",
            job.job_name, job.media_uri, job.output_bucket, job.output_key
        );

        Ok(())
    }
}
