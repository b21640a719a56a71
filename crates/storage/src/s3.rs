//! S3 storage backend.
//!
//! Uploads objects with public-read intent and returns a URL built either
//! from `S3_PUBLIC_BASE_URL` (CDN / S3-compatible stores) or the standard
//! virtual-hosted bucket URL.

use aws_sdk_s3::primitives::ByteStream;

use crate::{unique_key, StorageError, StorageProvider, StoredObject};

/// Stores uploads in an S3 bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Build a client from the standard AWS environment (region, credentials).
    pub async fn from_env(
        bucket: &str,
        public_base_url: Option<String>,
    ) -> Result<Self, StorageError> {
        let config = aws_config::load_from_env().await;
        let region = config
            .region()
            .ok_or_else(|| StorageError::Config("AWS region is not configured".into()))?
            .to_string();

        let public_base_url = public_base_url
            .unwrap_or_else(|| format!("https://{bucket}.s3.{region}.amazonaws.com"));

        Ok(Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket: bucket.to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl StorageProvider for S3Storage {
    async fn put(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let key = unique_key(filename);
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;

        tracing::debug!(bucket = %self.bucket, key = %key, size, "Stored upload in S3");

        Ok(StoredObject {
            url: format!("{}/{key}", self.public_base_url),
            key,
        })
    }
}
