use super::response::{HandlerResponse, LISTING_CORS};
use crate::summaries::{scan_all, sort_newest_first, SummaryItem, SummaryStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

pub struct ListHandler {
    summaries: Arc<dyn SummaryStore>,
}

impl ListHandler {
    pub fn new(summaries: Arc<dyn SummaryStore>) -> Self {
        Self { summaries }
    }

    /// Every stored summary, newest first
    pub async fn list(&self) -> Result<Vec<SummaryItem>> {
        let mut items = scan_all(self.summaries.as_ref()).await?;
        sort_newest_first(&mut items);
        Ok(items)
    }

    pub async fn handle(&self) -> HandlerResponse {
        let listed = self
            .list()
            .await
            .and_then(|items| Ok((items.len(), serde_json::to_value(items)?)));

        match listed {
            Ok((count, body)) => {
                info!("Fetched {} summaries", count);
                HandlerResponse::json(200, &body, &LISTING_CORS)
            }
            Err(e) => {
                error!("Listing summaries failed: {:#}", e);
                HandlerResponse::internal_error(&format!("{:#}", e), &LISTING_CORS)
            }
        }
    }
}
