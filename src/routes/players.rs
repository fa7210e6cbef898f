use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;

use crate::db;
use crate::error::ApiError;
use crate::models::{DeleteResponse, PlayerPayload, PlayerResponse};
use crate::state::AppState;

// GET /api/players - List all players
pub async fn get_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let players = db::players::list_players(state.players.as_ref()).await?;
    Ok(Json(players))
}

// POST /api/players - Add a new player
pub async fn add_player(
    State(state): State<AppState>,
    Json(body): Json<PlayerPayload>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = db::players::create_player(state.players.as_ref(), body.player).await?;
    Ok(Json(PlayerResponse {
        success: true,
        player,
    }))
}

// PUT /api/players/:id - Replace a player
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PlayerPayload>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = db::players::update_player(state.players.as_ref(), &id, body.player).await?;
    Ok(Json(PlayerResponse {
        success: true,
        player,
    }))
}

// DELETE /api/players/:id - Delete a player
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    db::players::delete_player(state.players.as_ref(), &id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "Player deleted successfully".to_string(),
    }))
}
