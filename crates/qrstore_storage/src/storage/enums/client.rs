//! Implements a generic enum to handle different storage clients based on the configured storage type
//! This enum is meant to provide a common interface to use in the server
use crate::storage::base::StorageClient;
use crate::storage::local::client::LocalStorageClient;
use qrstore_error::error::StorageError;
use qrstore_settings::config::{QrStoreConfig, QrStoreStorageSettings, StorageType};

#[cfg(feature = "aws_storage")]
use crate::storage::aws::client::AWSStorageClient;

pub enum StorageClientEnum {
    #[cfg(feature = "aws_storage")]
    AWS(AWSStorageClient),
    Local(LocalStorageClient),
}

impl StorageClientEnum {
    pub fn name(&self) -> &str {
        match self {
            #[cfg(feature = "aws_storage")]
            StorageClientEnum::AWS(client) => client.name(),
            StorageClientEnum::Local(client) => client.name(),
        }
    }

    pub fn bucket(&self) -> &str {
        match self {
            #[cfg(feature = "aws_storage")]
            StorageClientEnum::AWS(client) => client.bucket(),
            StorageClientEnum::Local(client) => client.bucket(),
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            #[cfg(feature = "aws_storage")]
            StorageClientEnum::AWS(client) => client.storage_type(),
            StorageClientEnum::Local(client) => client.storage_type(),
        }
    }

    pub async fn new(settings: &QrStoreStorageSettings) -> Result<Self, StorageError> {
        match settings.storage_type {
            #[cfg(feature = "aws_storage")]
            StorageType::AWS => {
                let client = AWSStorageClient::new(settings).await?;
                Ok(StorageClientEnum::AWS(client))
            }
            #[cfg(not(feature = "aws_storage"))]
            StorageType::AWS => Err(StorageError::UnsupportedClient(
                settings.storage_type.to_string(),
            )),
            StorageType::Local => {
                let client = LocalStorageClient::new(settings).await?;
                Ok(StorageClientEnum::Local(client))
            }
        }
    }

    pub async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        match self {
            #[cfg(feature = "aws_storage")]
            StorageClientEnum::AWS(client) => client.put_object(key, body, content_type).await,
            StorageClientEnum::Local(client) => client.put_object(key, body, content_type).await,
        }
    }

    pub async fn bucket_location(&self) -> Result<Option<String>, StorageError> {
        match self {
            #[cfg(feature = "aws_storage")]
            StorageClientEnum::AWS(client) => client.bucket_location().await,
            StorageClientEnum::Local(client) => client.bucket_location().await,
        }
    }
}

pub async fn get_storage_system(config: &QrStoreConfig) -> Result<StorageClientEnum, StorageError> {
    StorageClientEnum::new(&config.storage_settings()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_storage_system_local() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_str().unwrap().to_string();

        let config = QrStoreConfig::from_lookup(|key| match key {
            "QRSTORE_BUCKET" => Some("rigas32".to_string()),
            "QRSTORE_STORAGE_TYPE" => Some("local".to_string()),
            "QRSTORE_LOCAL_ROOT" => Some(root.clone()),
            _ => None,
        })
        .unwrap();

        let storage = get_storage_system(&config).await.unwrap();
        assert_eq!(storage.name(), "LocalStorageClient");
        assert_eq!(storage.bucket(), "rigas32");
        assert_eq!(storage.storage_type(), StorageType::Local);

        storage
            .put_object("example.com_page.png", vec![0u8; 16], "image/png")
            .await
            .unwrap();
        assert!(temp_dir.path().join("rigas32/example.com_page.png").exists());
        assert_eq!(storage.bucket_location().await.unwrap(), None);
    }
}
