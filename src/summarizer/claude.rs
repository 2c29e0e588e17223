use super::messages::{Message, MessagesRequest, MessagesResponse};
use super::{build_prompt, Summarizer, SummarizerError};
use crate::config::Config;
use reqwest::StatusCode;
use tracing::{error, info};

/// Value of the `anthropic-version` header
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct ClaudeSettings {
    /// API root, without the `/v1/messages` path
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Language the summary is requested in
    pub summary_language: String,
}

impl ClaudeSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            base_url: cfg.summarizer_base_url.clone(),
            model: cfg.summarizer_model.clone(),
            max_tokens: cfg.summarizer_max_tokens,
            summary_language: cfg.summary_language.clone(),
        }
    }
}

/// Anthropic Messages API client
pub struct ClaudeClient {
    settings: ClaudeSettings,
    client: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(settings: ClaudeSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl Summarizer for ClaudeClient {
    async fn summarize(&self, api_key: &str, transcript: &str) -> Result<String, SummarizerError> {
        let request = MessagesRequest {
            model: self.settings.model.clone(),
            max_tokens: self.settings.max_tokens,
            messages: vec![Message::user(build_prompt(
                transcript,
                &self.settings.summary_language,
            ))],
        };

        info!(
            "Calling Claude API (model={}, transcript_chars={})",
            request.model,
            transcript.chars().count()
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        // Anything but 200 fails, including other 2xx codes
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Claude API error: {} {}", status, body);
            return Err(SummarizerError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await?;

        parsed
            .first_text()
            .map(str::to_owned)
            .ok_or(SummarizerError::EmptyResponse)
    }
}
