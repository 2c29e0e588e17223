use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A stored summary, written once per transcription job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Transcription job name, e.g. `meeting-transcript-20240101120000`
    pub meeting_id: String,

    pub summary: String,

    /// Key of the transcript object the summary was generated from
    pub transcript_s3_key: String,

    /// ISO 8601 local-style timestamp (`2024-01-01T12:00:00.000000`)
    pub created_at: String,
}

/// The listing projection of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub meeting_id: String,
    pub summary: String,
    pub created_at: String,
}

impl From<SummaryRecord> for SummaryItem {
    fn from(record: SummaryRecord) -> Self {
        Self {
            meeting_id: record.meeting_id,
            summary: record.summary,
            created_at: record.created_at,
        }
    }
}

/// Current time in the format stored in `created_at`.
///
/// Fixed width, no offset, so string order equals chronological order.
pub fn created_at_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Newest first, comparing `created_at` as strings
pub fn sort_newest_first(items: &mut [SummaryItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
