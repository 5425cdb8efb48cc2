use crate::storage::base::StorageClient;
use async_trait::async_trait;
use qrstore_error::error::StorageError;
use qrstore_settings::config::{QrStoreStorageSettings, StorageType};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores objects as files under `<root>/<bucket>/<key>`
pub struct LocalStorageClient {
    pub root: PathBuf,
    pub bucket: String,
}

impl LocalStorageClient {
    pub fn bucket_path(&self) -> PathBuf {
        self.root.join(&self.bucket)
    }

    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && Path::new(key)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !valid {
            return Err(StorageError::Error(format!("Invalid object key: {}", key)));
        }

        Ok(self.bucket_path().join(key))
    }
}

#[async_trait]
impl StorageClient for LocalStorageClient {
    fn storage_type(&self) -> StorageType {
        StorageType::Local
    }

    fn name(&self) -> &str {
        "LocalStorageClient"
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn new(settings: &QrStoreStorageSettings) -> Result<Self, StorageError> {
        let client = Self {
            root: settings.local_root.clone(),
            bucket: settings.bucket.clone(),
        };

        // bucket should be a dir. If it does not exist, create it
        fs::create_dir_all(client.bucket_path())
            .await
            .map_err(|e| StorageError::Error(format!("Unable to create bucket directory: {}", e)))?;

        Ok(client)
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.object_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Error(format!("Unable to create directory: {}", e)))?;
        }

        debug!("Writing {} bytes to {}", body.len(), path.display());

        fs::write(&path, body)
            .await
            .map_err(|e| StorageError::Error(format!("Unable to write object: {}", e)))?;

        Ok(())
    }

    async fn bucket_location(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
}
