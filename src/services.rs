//! AWS-backed collaborators, built once per process and shared by every
//! invocation.

use crate::config::Config;
use crate::handlers::{IngestHandler, ListHandler, SummarizeHandler};
use crate::secrets::SsmSecretStore;
use crate::storage::S3ObjectStore;
use crate::summaries::DynamoSummaryStore;
use crate::summarizer::{ClaudeClient, ClaudeSettings};
use crate::transcribe::AwsTranscriber;
use anyhow::Result;
use aws_config::{BehaviorVersion, SdkConfig};
use std::sync::Arc;
use tracing::info;

pub struct AwsServices {
    sdk: SdkConfig,
}

impl AwsServices {
    /// Resolve region and credentials from the standard AWS environment
    pub async fn load() -> Self {
        let sdk = aws_config::load_defaults(BehaviorVersion::latest()).await;

        info!(
            "AWS config loaded (region={})",
            sdk.region().map(|r| r.as_ref()).unwrap_or("unset")
        );

        Self { sdk }
    }

    fn storage(&self) -> Arc<S3ObjectStore> {
        Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&self.sdk)))
    }

    fn summaries(&self, cfg: &Config) -> Arc<DynamoSummaryStore> {
        Arc::new(DynamoSummaryStore::new(
            aws_sdk_dynamodb::Client::new(&self.sdk),
            cfg.dynamodb_table_name.clone(),
        ))
    }

    pub fn ingest_handler(&self, cfg: &Config) -> Result<IngestHandler> {
        let transcriber = AwsTranscriber::new(aws_sdk_transcribe::Client::new(&self.sdk));

        Ok(IngestHandler::new(
            self.storage(),
            Arc::new(transcriber),
            cfg.require_bucket()?,
            cfg.transcribe_language.clone(),
        ))
    }

    pub fn summarize_handler(&self, cfg: &Config) -> SummarizeHandler {
        let secrets = SsmSecretStore::new(aws_sdk_ssm::Client::new(&self.sdk));
        let summarizer = ClaudeClient::new(ClaudeSettings::from_config(cfg));

        SummarizeHandler::new(
            self.storage(),
            Arc::new(secrets),
            Arc::new(summarizer),
            self.summaries(cfg),
            cfg.api_key_parameter.clone(),
        )
    }

    pub fn list_handler(&self, cfg: &Config) -> ListHandler {
        ListHandler::new(self.summaries(cfg))
    }
}
