use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::sanitize::sanitize;
use crate::store::PlayerTable;

// Player records are schemaless beyond these three server-owned fields.
const ID: &str = "id";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

pub async fn list_players(table: &dyn PlayerTable) -> Result<Vec<Value>> {
    let items = table.scan().await?;
    Ok(items
        .into_iter()
        .map(|item| sanitize(&Value::Object(item)))
        .collect())
}

/// Create a player. The id is the current timestamp in milliseconds; a
/// same-millisecond collision silently overwrites, the same last-writer-wins
/// policy as every other write here.
pub async fn create_player(
    table: &dyn PlayerTable,
    attrs: Map<String, Value>,
) -> Result<Value> {
    let now = Utc::now();
    let mut record = attrs;
    // Server-generated id wins over anything the client put in the payload
    record.insert(
        ID.to_string(),
        Value::String(now.timestamp_millis().to_string()),
    );
    record.insert(
        CREATED_AT.to_string(),
        Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    table.put(record.clone()).await?;
    Ok(sanitize(&Value::Object(record)))
}

/// Full replacement keyed by the path id. No existence check: updating an
/// unknown id creates the record.
pub async fn update_player(
    table: &dyn PlayerTable,
    id: &str,
    attrs: Map<String, Value>,
) -> Result<Value> {
    let mut record = attrs;
    record.insert(ID.to_string(), Value::String(id.to_string()));
    record.insert(
        UPDATED_AT.to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    table.put(record.clone()).await?;
    Ok(sanitize(&Value::Object(record)))
}

/// Unconditional delete; deleting an absent id reports success.
pub async fn delete_player(table: &dyn PlayerTable, id: &str) -> Result<()> {
    table.delete(id).await
}
