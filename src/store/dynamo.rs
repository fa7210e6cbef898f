use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};

use super::PlayerTable;
use crate::sanitize;

/// DynamoDB-backed player table.
pub struct DynamoPlayerTable {
    client: Client,
    table_name: String,
}

impl DynamoPlayerTable {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl PlayerTable for DynamoPlayerTable {
    async fn scan(&self) -> Result<Vec<Map<String, Value>>> {
        let response = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .context("failed to scan players table")?;

        Ok(response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(sanitize::item_to_map)
            .collect())
    }

    async fn put(&self, item: Map<String, Value>) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(sanitize::map_to_item(&item)))
            .send()
            .await
            .context("failed to put player item")?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .context("failed to delete player item")?;

        Ok(())
    }
}
