//! Local-filesystem storage backend.
//!
//! Files are written under the configured upload root and served by the
//! frontend (or a reverse proxy) at `/uploads/<key>`.

use std::path::PathBuf;

use crate::{unique_key, StorageError, StorageProvider, StoredObject};

/// Stores uploads on local disk.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: upload_dir.into(),
        }
    }
}

#[async_trait::async_trait]
impl StorageProvider for LocalStorage {
    async fn put(
        &self,
        filename: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let key = unique_key(filename);

        tokio::fs::create_dir_all(&self.root).await?;
        let dest = self.root.join(&key);
        tokio::fs::write(&dest, &bytes).await?;

        tracing::debug!(path = %dest.display(), size = bytes.len(), "Stored upload on disk");

        Ok(StoredObject {
            url: format!("/uploads/{key}"),
            key,
        })
    }
}
