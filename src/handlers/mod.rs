//! The three pipeline handlers.
//!
//! - `IngestHandler`: multipart upload → object storage → transcription job
//! - `SummarizeHandler`: transcript object → summarization API → summary store
//! - `ListHandler`: summary store → newest-first JSON array
//!
//! Handlers own their collaborators as trait objects and are independent of
//! the transport; `crate::lambda` and `crate::http` adapt them.

mod ingest;
mod list;
mod multipart;
mod response;
mod summarize;

pub use ingest::{IngestError, IngestHandler, IngestReceipt, UploadRequest};
pub use list::ListHandler;
pub use multipart::{extract_audio, AudioUpload, AUDIO_FIELD};
pub use response::{CorsPolicy, HandlerResponse, LISTING_CORS, UPLOAD_CORS};
pub use summarize::{meeting_id_from_key, SummarizeError, SummarizeHandler};
