//! In-memory stand-ins for the managed services.
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use meeting_minutes::summaries::{PageToken, ScanPage};
use meeting_minutes::summarizer::{Summarizer, SummarizerError};
use meeting_minutes::{
    ObjectStore, SecretStore, SummaryItem, SummaryRecord, SummaryStore, TranscriptionJob,
    TranscriptionService,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const BUCKET: &str = "meeting-minutes-test";
pub const BOUNDARY: &str = "----WebKitFormBoundary7MA4YWxkTrZu0gW";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    pub fail_puts: bool,
}

impl MemoryObjectStore {
    pub fn failing() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, bucket: &str, key: &str, body: impl Into<Bytes>) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: "application/json".to_string(),
            },
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes, content_type: &str) -> Result<()> {
        if self.fail_puts {
            return Err(anyhow!("AccessDenied: bucket {} is not writable", bucket));
        }
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        self.object(bucket, key)
            .map(|object| object.body)
            .ok_or_else(|| anyhow!("NoSuchKey: s3://{}/{}", bucket, key))
    }
}

#[derive(Default)]
pub struct RecordingTranscriber {
    jobs: Mutex<Vec<TranscriptionJob>>,
}

impl RecordingTranscriber {
    pub fn jobs(&self) -> Vec<TranscriptionJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptionService for RecordingTranscriber {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<()> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(())
    }
}

pub struct StaticSecrets {
    values: HashMap<String, String>,
    pub reads: AtomicUsize,
}

impl StaticSecrets {
    pub fn with(name: &str, value: &str) -> Self {
        Self {
            values: HashMap::from([(name.to_string(), value.to_string())]),
            reads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SecretStore for StaticSecrets {
    async fn get_secret(&self, name: &str) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("ParameterNotFound: {}", name))
    }
}

/// Echoes a canned summary and remembers what it was asked
#[derive(Default)]
pub struct CannedSummarizer {
    pub calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(&self, api_key: &str, transcript: &str) -> Result<String, SummarizerError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), transcript.to_string()));
        Ok(format!("Summary: {}", transcript))
    }
}

/// Summary store that hands out `page_size` items per scan
pub struct MemorySummaryStore {
    records: Mutex<Vec<SummaryRecord>>,
    page_size: usize,
    pub scans: AtomicUsize,
    pub fail_scans: bool,
}

impl MemorySummaryStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            page_size,
            scans: AtomicUsize::new(0),
            fail_scans: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_scans: true,
            ..Self::new(10)
        }
    }

    pub fn with_records(page_size: usize, records: Vec<SummaryRecord>) -> Self {
        let store = Self::new(page_size);
        *store.records.lock().unwrap() = records;
        store
    }

    pub fn records(&self) -> Vec<SummaryRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryStore for MemorySummaryStore {
    async fn put(&self, record: &SummaryRecord) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        records.retain(|r| r.meeting_id != record.meeting_id);
        records.push(record.clone());
        Ok(())
    }

    async fn scan_page(&self, start: Option<PageToken>) -> Result<ScanPage> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        if self.fail_scans {
            return Err(anyhow!("ProvisionedThroughputExceededException"));
        }

        let records = self.records.lock().unwrap();
        let offset = match start {
            Some(token) => {
                let last = token.get("meeting_id").cloned().unwrap_or_default();
                records
                    .iter()
                    .position(|r| r.meeting_id == last)
                    .map(|i| i + 1)
                    .ok_or_else(|| anyhow!("unknown start key {}", last))?
            }
            None => 0,
        };

        let page: Vec<SummaryRecord> = records.iter().skip(offset).take(self.page_size).cloned().collect();
        let next = if offset + page.len() < records.len() {
            page.last()
                .map(|r| PageToken::from([("meeting_id".to_string(), r.meeting_id.clone())]))
        } else {
            None
        };

        Ok(ScanPage {
            items: page.into_iter().map(SummaryItem::from).collect(),
            next,
        })
    }
}

pub fn record(meeting_id: &str, created_at: &str) -> SummaryRecord {
    SummaryRecord {
        meeting_id: meeting_id.to_string(),
        summary: format!("summary of {}", meeting_id),
        transcript_s3_key: format!("transcripts/{}.json", meeting_id),
        created_at: created_at.to_string(),
    }
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// One form part: (field name, optional filename, payload)
pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: audio/webm\r\n");
            }
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Bytes that would not survive text handling or whitespace trimming
pub fn webm_payload() -> Vec<u8> {
    let mut data = vec![0x1A, 0x45, 0xDF, 0xA3, 0x00, 0xFF, 0x0D, 0x0A];
    data.extend((0u8..=255).rev());
    data.extend_from_slice(b"  \r\n\t ");
    data
}
