use axum::{extract::State, response::Json};
use serde_json::{Map, Value};

use crate::db;
use crate::error::ApiError;
use crate::models::{Settings, SettingsUpdateResponse};
use crate::state::AppState;

// GET /api/settings - Read the settings singleton ({} until first write)
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let settings = db::settings::get_settings(state.settings.as_ref()).await?;
    let body = match settings {
        Some(settings) => serde_json::to_value(&settings).map_err(anyhow::Error::from)?,
        None => Value::Object(Map::new()),
    };
    Ok(Json(body))
}

// PUT /api/settings - Replace both feature flags, creating on first write
pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<Settings>,
) -> Result<Json<SettingsUpdateResponse>, ApiError> {
    let settings = db::settings::put_settings(state.settings.as_ref(), body).await?;
    Ok(Json(SettingsUpdateResponse {
        message: "Settings updated successfully".to_string(),
        settings,
    }))
}
