use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::models::{AuthRequest, AuthResponse};
use crate::state::AppState;

// POST /api/auth - Verify the shared admin secret
//
// Plain equality is all the internal-admin threat model calls for; there is
// no session to establish, the client just learns whether it may proceed.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if body.password == state.admin_password {
        Ok(Json(AuthResponse {
            success: true,
            message: "Authentication successful".to_string(),
        }))
    } else {
        Err(ApiError::InvalidPassword)
    }
}
