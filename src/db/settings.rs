use anyhow::Result;

use crate::models::Settings;
use crate::store::SettingsDocument;

/// Read the singleton; `None` means no write has happened yet and callers
/// treat everything as defaulted.
pub async fn get_settings(store: &dyn SettingsDocument) -> Result<Option<Settings>> {
    store.load().await
}

/// Full replace of the singleton. Absent fields were already coerced to the
/// schema defaults during deserialization, so both flags are always written.
pub async fn put_settings(store: &dyn SettingsDocument, settings: Settings) -> Result<Settings> {
    store.save(&settings).await?;
    Ok(settings)
}
