use uuid::Uuid;

use crate::error::ApiError;
use crate::store::ImageBucket;

/// Upload cap, checked before the bucket is touched.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Persist an uploaded image under a collision-resistant name and return its
/// public URL. The uuid prefix keeps distinct uploads of the same filename
/// from clobbering each other.
pub async fn store_image(
    bucket: &dyn ImageBucket,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<String, ApiError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::BadRequest(
            "File too large (5MB limit)".to_string(),
        ));
    }

    let key = format!("{}-{}", Uuid::new_v4(), file_name);
    let url = bucket.put_object(&key, content_type, bytes).await?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryImageBucket;

    #[tokio::test]
    async fn oversized_payload_is_rejected_before_any_bucket_write() {
        let bucket = MemoryImageBucket::default();
        let result = store_image(
            &bucket,
            "big.png",
            "image/png",
            vec![0u8; MAX_UPLOAD_BYTES + 1],
        )
        .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
        assert_eq!(bucket.object_count(), 0);
    }

    #[tokio::test]
    async fn stored_name_keeps_the_original_filename() {
        let bucket = MemoryImageBucket::default();
        let url = store_image(&bucket, "kit.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();

        assert!(url.ends_with("-kit.png"));
        assert_eq!(bucket.object_count(), 1);
    }
}
