//! Object storage for uploaded audio and transcription output.

mod s3;

pub use s3::S3ObjectStore;

use anyhow::Result;
use bytes::Bytes;

/// Key prefix for uploaded recordings
pub const RAW_AUDIO_PREFIX: &str = "raw_audio/";

/// Key prefix the transcription service writes results under
pub const TRANSCRIPTS_PREFIX: &str = "transcripts/";

/// Content type recorded on every uploaded audio object
pub const AUDIO_CONTENT_TYPE: &str = "audio/webm";

/// Bucket/key blob store.
///
/// Implementations:
/// - `S3ObjectStore`: Amazon S3 via the AWS SDK
/// - in-memory fakes in the integration tests
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` at `bucket/key`, replacing any existing object
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes, content_type: &str)
        -> Result<()>;

    /// Read the whole object at `bucket/key`
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes>;
}

/// `s3://bucket/key` URI for an object, as the transcription service expects it.
pub fn object_uri(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}
