use crate::handlers::{IngestHandler, ListHandler};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub ingest: Arc<IngestHandler>,
    pub listing: Arc<ListHandler>,
    /// Directory served for paths no route matches (the browser client)
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(ingest: IngestHandler, listing: ListHandler) -> Self {
        Self {
            ingest: Arc::new(ingest),
            listing: Arc::new(listing),
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}
