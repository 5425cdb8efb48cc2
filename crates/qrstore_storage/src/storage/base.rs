use async_trait::async_trait;
use qrstore_error::error::StorageError;
use qrstore_settings::config::{QrStoreStorageSettings, StorageType};

/// Minimal object-storage surface used by the QR handler.
///
/// Writes overwrite any existing object under the same key.
#[async_trait]
pub trait StorageClient: Sized + Send + Sync {
    fn storage_type(&self) -> StorageType;
    fn name(&self) -> &str;
    fn bucket(&self) -> &str;
    async fn new(settings: &QrStoreStorageSettings) -> Result<Self, StorageError>;
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Region the bucket lives in. `None` is the default region.
    async fn bucket_location(&self) -> Result<Option<String>, StorageError>;
}
