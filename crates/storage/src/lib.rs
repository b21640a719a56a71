//! Blob storage abstraction for uploaded images.
//!
//! Two backends implement [`StorageProvider`]: local disk for development
//! and S3 for production. The backend is selected from the environment by
//! [`StorageConfig::from_env`]: when `S3_BUCKET` is set the S3 provider is
//! used, otherwise files land on local disk under `UPLOAD_DIR`.

pub mod local;
pub mod s3;

use std::sync::Arc;

pub use local::LocalStorage;
pub use s3::S3Storage;

/// Errors produced by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 upload failed: {0}")]
    S3(String),

    #[error("Invalid storage configuration: {0}")]
    Config(String),
}

/// A stored blob: the public URL to serve it from and the backend key.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Publicly servable URL (`/uploads/...` for local, absolute for S3).
    pub url: String,
    /// Backend-specific object key (relative path or S3 key).
    pub key: String,
}

/// Pluggable blob storage backend.
#[async_trait::async_trait]
pub trait StorageProvider: Send + Sync {
    /// Store `bytes` under a collision-free key derived from `filename`,
    /// returning the public URL.
    async fn put(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError>;
}

/// Shared handle to the configured storage backend.
pub type DynStorageProvider = Arc<dyn StorageProvider>;

/// Storage backend selection, read from the environment.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Local filesystem: upload root directory and URL prefix.
    Local { upload_dir: String },
    /// S3 bucket, with an optional public base URL override (useful for
    /// CDN fronting or S3-compatible stores).
    S3 {
        bucket: String,
        public_base_url: Option<String>,
    },
}

impl std::fmt::Display for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageConfig::Local { .. } => f.write_str("local"),
            StorageConfig::S3 { .. } => f.write_str("s3"),
        }
    }
}

/// Default local upload directory, served at `/uploads/...`.
const DEFAULT_UPLOAD_DIR: &str = "public/uploads";

impl StorageConfig {
    /// Select the backend from environment variables.
    ///
    /// | Env Var              | Effect                                    |
    /// |----------------------|-------------------------------------------|
    /// | `S3_BUCKET`          | When set, use the S3 backend              |
    /// | `S3_PUBLIC_BASE_URL` | Public URL prefix for stored objects      |
    /// | `UPLOAD_DIR`         | Local directory (default `public/uploads`)|
    pub fn from_env() -> Self {
        match std::env::var("S3_BUCKET") {
            Ok(bucket) if !bucket.is_empty() => StorageConfig::S3 {
                bucket,
                public_base_url: std::env::var("S3_PUBLIC_BASE_URL").ok(),
            },
            _ => StorageConfig::Local {
                upload_dir: std::env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into()),
            },
        }
    }

    /// Build the provider for this configuration.
    ///
    /// The S3 client resolves region and credentials from the standard AWS
    /// environment; local storage creates the upload directory lazily on
    /// first write.
    pub async fn build_provider(&self) -> Result<DynStorageProvider, StorageError> {
        match self {
            StorageConfig::Local { upload_dir } => {
                tracing::info!(upload_dir = %upload_dir, "Using local upload storage");
                Ok(Arc::new(LocalStorage::new(upload_dir)))
            }
            StorageConfig::S3 {
                bucket,
                public_base_url,
            } => {
                tracing::info!(bucket = %bucket, "Using S3 upload storage");
                let provider = S3Storage::from_env(bucket, public_base_url.clone()).await?;
                Ok(Arc::new(provider))
            }
        }
    }
}

/// Build a collision-free object key from the original filename.
///
/// Keys look like `1717171717171-a1b2c3d4.png`: a millisecond timestamp plus
/// a short random suffix, so repeated uploads of the same filename never
/// overwrite each other.
pub(crate) fn unique_key(filename: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    match folio_core::upload::file_extension(filename) {
        Some(ext) => format!("{stamp}-{}.{ext}", &suffix[..8]),
        None => format!("{stamp}-{}", &suffix[..8]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_key_keeps_extension() {
        let key = unique_key("photo.PNG");
        assert!(key.ends_with(".png"), "got {key}");
    }

    #[test]
    fn test_unique_key_without_extension() {
        let key = unique_key("README");
        assert!(!key.contains('.'), "got {key}");
    }

    #[test]
    fn test_unique_keys_differ() {
        assert_ne!(unique_key("a.png"), unique_key("a.png"));
    }
}
