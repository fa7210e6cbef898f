//! In-memory store implementations backing the endpoint tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{ImageBucket, PlayerTable, SettingsDocument};
use crate::models::Settings;

#[derive(Default)]
pub struct MemoryPlayerTable {
    items: Mutex<BTreeMap<String, Map<String, Value>>>,
}

impl MemoryPlayerTable {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl PlayerTable for MemoryPlayerTable {
    async fn scan(&self) -> Result<Vec<Map<String, Value>>> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn put(&self, item: Map<String, Value>) -> Result<()> {
        let id = item
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        self.items.lock().unwrap().insert(id, item);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.items.lock().unwrap().remove(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryImageBucket {
    objects: Mutex<HashMap<String, (String, Vec<u8>)>>,
}

impl MemoryImageBucket {
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageBucket for MemoryImageBucket {
    async fn put_object(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (content_type.to_string(), bytes));
        Ok(format!("https://images.test/{key}"))
    }
}

#[derive(Default)]
pub struct MemorySettings {
    document: Mutex<Option<Settings>>,
}

#[async_trait]
impl SettingsDocument for MemorySettings {
    async fn load(&self) -> Result<Option<Settings>> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.document.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}
