use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use super::ImageBucket;

/// S3-backed image bucket. The retrieval URL is built from the bucket's
/// virtual-hosted endpoint; whether objects are actually world-readable is
/// decided by the bucket policy, not here.
pub struct S3ImageBucket {
    client: Client,
    bucket: String,
    region: String,
}

impl S3ImageBucket {
    pub fn new(client: Client, bucket: String, region: String) -> Self {
        Self {
            client,
            bucket,
            region,
        }
    }
}

#[async_trait]
impl ImageBucket for S3ImageBucket {
    async fn put_object(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .context("failed to upload image to bucket")?;

        Ok(format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        ))
    }
}
