//! Local HTTP API mirroring the API Gateway endpoints
//!
//! Useful for exercising the pipeline against real AWS resources without
//! deploying the Lambda functions:
//! - POST /upload - Ingest a multipart audio upload
//! - GET /summaries - List stored summaries, newest first
//! - GET /health - Health check
//! - anything else - Files from the static directory, when one is configured

mod handlers;
mod routes;
mod state;

pub use routes::{create_router, MAX_UPLOAD_BYTES};
pub use state::AppState;
