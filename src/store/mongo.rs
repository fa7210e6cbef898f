use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::Database;
use mongodb::bson::doc;

use super::SettingsDocument;
use crate::models::Settings;

const COLLECTION: &str = "settings";

/// MongoDB-backed settings singleton. The collection holds at most one
/// document; reads take whichever one `find_one` returns, writes upsert it.
pub struct MongoSettings {
    collection: mongodb::Collection<Settings>,
}

impl MongoSettings {
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl SettingsDocument for MongoSettings {
    async fn load(&self) -> Result<Option<Settings>> {
        self.collection
            .find_one(doc! {})
            .await
            .context("failed to read settings document")
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let update = doc! {
            "$set": doc! {
                "welcomeScreen": settings.welcome_screen,
                "contactUsButton": settings.contact_us_button,
            }
        };

        self.collection
            .update_one(doc! {}, update)
            .upsert(true)
            .await
            .context("failed to write settings document")?;

        Ok(())
    }
}
