use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The two client-app feature flags, stored as a single document. Fields the
/// caller leaves out fall back to the schema default (enabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "enabled")]
    pub welcome_screen: bool,
    #[serde(default = "enabled")]
    pub contact_us_button: bool,
}

fn enabled() -> bool {
    true
}

/// Request body for player create/update; the attributes arrive wrapped in a
/// `player` envelope and stay schemaless beyond id and timestamps.
#[derive(Debug, Deserialize)]
pub struct PlayerPayload {
    #[serde(default)]
    pub player: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub success: bool,
    pub player: Value,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct SettingsUpdateResponse {
    pub message: String,
    pub settings: Settings,
}
