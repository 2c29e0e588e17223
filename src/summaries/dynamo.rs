use super::{PageToken, ScanPage, SummaryItem, SummaryRecord, SummaryStore};
use anyhow::{anyhow, Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use tracing::info;

type Item = HashMap<String, AttributeValue>;

/// DynamoDB table with partition key `meeting_id` (S)
pub struct DynamoSummaryStore {
    client: Client,
    table_name: String,
}

impl DynamoSummaryStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait::async_trait]
impl SummaryStore for DynamoSummaryStore {
    async fn put(&self, record: &SummaryRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("meeting_id", AttributeValue::S(record.meeting_id.clone()))
            .item("summary", AttributeValue::S(record.summary.clone()))
            .item(
                "transcript_s3_key",
                AttributeValue::S(record.transcript_s3_key.clone()),
            )
            .item("created_at", AttributeValue::S(record.created_at.clone()))
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to save summary {} to {}",
                    record.meeting_id, self.table_name
                )
            })?;

        info!("Saved summary {} to {}", record.meeting_id, self.table_name);

        Ok(())
    }

    async fn scan_page(&self, start: Option<PageToken>) -> Result<ScanPage> {
        let start_key = start.map(|token| {
            token
                .into_iter()
                .map(|(name, value)| (name, AttributeValue::S(value)))
                .collect::<Item>()
        });

        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .with_context(|| format!("Failed to scan {}", self.table_name))?;

        let items = output
            .items()
            .iter()
            .map(item_to_summary)
            .collect::<Result<Vec<_>>>()?;

        let next = output.last_evaluated_key().map(key_to_token).transpose()?;

        Ok(ScanPage { items, next })
    }
}

fn string_attr(item: &Item, name: &str) -> Result<String> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| anyhow!("Item is missing string attribute `{}`", name))
}

fn item_to_summary(item: &Item) -> Result<SummaryItem> {
    Ok(SummaryItem {
        meeting_id: string_attr(item, "meeting_id")?,
        summary: string_attr(item, "summary")?,
        created_at: string_attr(item, "created_at")?,
    })
}

fn key_to_token(key: &Item) -> Result<PageToken> {
    key.iter()
        .map(|(name, value)| match value.as_s() {
            Ok(s) => Ok((name.clone(), s.clone())),
            Err(_) => Err(anyhow!("Unsupported key attribute type for `{}`", name)),
        })
        .collect()
}
