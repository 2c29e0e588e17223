use super::ingest::IngestError;
use bytes::Bytes;
use std::convert::Infallible;

/// Form field carrying the recording
pub const AUDIO_FIELD: &str = "audio";

/// The `audio` part of an upload
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// `filename` attribute of the part, when present and non-empty
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// Pull the first `audio` part out of a buffered multipart/form-data body.
///
/// Later `audio` parts and all other fields are ignored.
pub async fn extract_audio(content_type: &str, body: Bytes) -> Result<AudioUpload, IngestError> {
    let boundary = multer::parse_boundary(content_type).map_err(|_| IngestError::MissingBoundary)?;

    let stream = futures::stream::once(async move { Ok::<Bytes, Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        let data = field.bytes().await?;

        return Ok(AudioUpload { file_name, data });
    }

    Err(IngestError::MissingAudioPart)
}
