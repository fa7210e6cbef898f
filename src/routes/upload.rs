use axum::{
    extract::{Multipart, State},
    response::Json,
};

use crate::db;
use crate::error::ApiError;
use crate::models::UploadResponse;
use crate::state::AppState;

// POST /api/upload - Upload an image (multipart, field name "image")
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Malformed upload".to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::BadRequest("Malformed upload".to_string()))?;

        let image_url = db::images::store_image(
            state.images.as_ref(),
            &file_name,
            &content_type,
            bytes.to_vec(),
        )
        .await?;

        return Ok(Json(UploadResponse {
            success: true,
            image_url,
        }));
    }

    Err(ApiError::BadRequest("No file uploaded".to_string()))
}
