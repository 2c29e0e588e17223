pub mod config;
pub mod handlers;
pub mod http;
pub mod lambda;
pub mod secrets;
pub mod services;
pub mod storage;
pub mod summaries;
pub mod summarizer;
pub mod telemetry;
pub mod transcribe;

pub use config::Config;
pub use handlers::{
    HandlerResponse, IngestError, IngestHandler, ListHandler, SummarizeError, SummarizeHandler,
    UploadRequest,
};
pub use http::{create_router, AppState, MAX_UPLOAD_BYTES};
pub use secrets::{SecretStore, SsmSecretStore};
pub use services::AwsServices;
pub use storage::{ObjectStore, S3ObjectStore};
pub use summaries::{DynamoSummaryStore, SummaryItem, SummaryRecord, SummaryStore};
pub use summarizer::{ClaudeClient, Summarizer, SummarizerError};
pub use transcribe::{AwsTranscriber, TranscriptionJob, TranscriptionService};
