//! Persistence of generated meeting summaries.

mod dynamo;
mod record;

pub use dynamo::DynamoSummaryStore;
pub use record::{created_at_now, sort_newest_first, SummaryItem, SummaryRecord};

use anyhow::Result;
use std::collections::HashMap;

/// Continuation token for a paginated scan (string-typed key attributes)
pub type PageToken = HashMap<String, String>;

/// One page of a full-table scan
#[derive(Debug, Default)]
pub struct ScanPage {
    pub items: Vec<SummaryItem>,

    /// Present while more pages remain
    pub next: Option<PageToken>,
}

/// Key-value store of summary records, keyed by `meeting_id`
#[async_trait::async_trait]
pub trait SummaryStore: Send + Sync {
    /// Unconditional put; an existing record with the same id is replaced
    async fn put(&self, record: &SummaryRecord) -> Result<()>;

    /// Scan one page, starting after `start` when given
    async fn scan_page(&self, start: Option<PageToken>) -> Result<ScanPage>;
}

/// Scan every page until the store stops returning a continuation token.
pub async fn scan_all(store: &dyn SummaryStore) -> Result<Vec<SummaryItem>> {
    let mut items = Vec::new();
    let mut start = None;
    let mut pages = 0usize;

    loop {
        let page = store.scan_page(start).await?;
        pages += 1;
        items.extend(page.items);

        match page.next {
            Some(token) => start = Some(token),
            None => break,
        }
    }

    tracing::debug!("Scanned {} items in {} pages", items.len(), pages);

    Ok(items)
}
