use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Transcript is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transcript document contains no transcripts")]
    Empty,
}

/// Result document written by the transcription service.
///
/// Only the fields read here are modelled; everything else
/// (per-word items, alternatives, ...) is ignored.
#[derive(Debug, Deserialize)]
pub struct TranscriptDocument {
    #[serde(rename = "jobName", default)]
    pub job_name: Option<String>,

    pub results: TranscriptResults,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptResults {
    #[serde(default)]
    pub transcripts: Vec<Transcript>,
}

#[derive(Debug, Deserialize)]
pub struct Transcript {
    pub transcript: String,
}

impl TranscriptDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TranscriptError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Text of the first transcript
    pub fn text(&self) -> Result<&str, TranscriptError> {
        self.results
            .transcripts
            .first()
            .map(|t| t.transcript.as_str())
            .ok_or(TranscriptError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_transcript() {
        let json = br#"{
            "jobName": "meeting-transcript-20240101120000",
            "accountId": "123456789012",
            "results": {
                "transcripts": [{"transcript": "Hello world"}, {"transcript": "ignored"}],
                "items": []
            },
            "status": "COMPLETED"
        }"#;

        let doc = TranscriptDocument::from_slice(json).unwrap();
        assert_eq!(doc.job_name.as_deref(), Some("meeting-transcript-20240101120000"));
        assert_eq!(doc.text().unwrap(), "Hello world");
    }

    #[test]
    fn empty_transcripts_is_an_error() {
        let doc = TranscriptDocument::from_slice(br#"{"results": {"transcripts": []}}"#).unwrap();
        assert!(matches!(doc.text(), Err(TranscriptError::Empty)));
    }

    #[test]
    fn missing_results_is_a_json_error() {
        let err = TranscriptDocument::from_slice(br#"{"status": "FAILED"}"#).unwrap_err();
        assert!(matches!(err, TranscriptError::Json(_)));
    }
}
