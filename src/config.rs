use anyhow::{Context, Result};
use serde::Deserialize;

/// Default config file stem, resolved relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/meeting-minutes";

/// Runtime configuration.
///
/// Layered as defaults → optional config file → environment variables, so the
/// deployed functions only need `S3_BUCKET_NAME` and `DYNAMODB_TABLE_NAME`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bucket holding uploaded audio and transcription output
    #[serde(default)]
    pub s3_bucket_name: Option<String>,

    #[serde(default = "default_table_name")]
    pub dynamodb_table_name: String,

    /// Source language passed to the transcription job
    #[serde(default = "default_transcribe_language")]
    pub transcribe_language: String,

    /// Parameter Store path of the summarization API key
    #[serde(default = "default_api_key_parameter")]
    pub api_key_parameter: String,

    #[serde(default = "default_summarizer_base_url")]
    pub summarizer_base_url: String,

    #[serde(default = "default_summarizer_model")]
    pub summarizer_model: String,

    #[serde(default = "default_summarizer_max_tokens")]
    pub summarizer_max_tokens: u32,

    /// Language the summary is written in
    #[serde(default = "default_summary_language")]
    pub summary_language: String,

    #[serde(default = "default_http_bind")]
    pub http_bind: String,

    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Directory the local server serves the browser client from; empty disables it
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_table_name() -> String {
    "MeetingMinutesSummary".to_string()
}

fn default_transcribe_language() -> String {
    "ja-JP".to_string()
}

fn default_api_key_parameter() -> String {
    "/meeting-minutes-app/claude-api-key".to_string()
}

fn default_summarizer_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_summarizer_model() -> String {
    "claude-3-5-sonnet-20240620".to_string()
}

fn default_summarizer_max_tokens() -> u32 {
    1024
}

fn default_summary_language() -> String {
    "Japanese".to_string()
}

fn default_http_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Config {
    /// Load from an optional config file (any format `config` understands),
    /// with environment variables taking precedence.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::default())
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn from_env() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// The bucket name, or an error when it is unset or blank.
    pub fn require_bucket(&self) -> Result<&str> {
        self.s3_bucket_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .context("S3_BUCKET_NAME is not configured")
    }

    pub fn static_dir(&self) -> Option<&str> {
        Some(self.static_dir.trim()).filter(|dir| !dir.is_empty())
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_bind, self.http_port)
    }
}
