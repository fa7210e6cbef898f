use std::sync::Arc;

use crate::store::{ImageBucket, PlayerTable, SettingsDocument};

/// Shared application state: one handle per backing store, constructed once
/// at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerTable>,
    pub images: Arc<dyn ImageBucket>,
    pub settings: Arc<dyn SettingsDocument>,
    pub admin_password: String,
}
