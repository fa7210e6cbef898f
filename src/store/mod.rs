use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::models::Settings;

pub mod dynamo;
pub mod mongo;
pub mod s3;

#[cfg(test)]
pub mod memory;

/// The key-value table holding player records, addressed by primary key "id".
/// Writes are unconditional overwrites; the table's own per-key atomicity is
/// the only serialization this system relies on.
#[async_trait]
pub trait PlayerTable: Send + Sync {
    /// Full scan. The roster is assumed small enough that this is one call.
    async fn scan(&self) -> Result<Vec<Map<String, Value>>>;
    /// Insert or overwrite the item keyed by its "id" field.
    async fn put(&self, item: Map<String, Value>) -> Result<()>;
    /// Delete by key; a missing key is not an error.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// The object-storage bucket for uploaded images. Public readability of the
/// returned URL is a bucket-configuration concern, not checked here.
#[async_trait]
pub trait ImageBucket: Send + Sync {
    /// Write the payload under `key` and return its public retrieval URL.
    async fn put_object(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<String>;
}

/// The document collection holding the settings singleton.
#[async_trait]
pub trait SettingsDocument: Send + Sync {
    async fn load(&self) -> Result<Option<Settings>>;
    /// Write both flags unconditionally, creating the document if absent.
    async fn save(&self, settings: &Settings) -> Result<()>;
}
