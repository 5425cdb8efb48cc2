use crate::storage::base::StorageClient;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::BucketLocationConstraint;
use aws_sdk_s3::Client;
use qrstore_error::error::StorageError;
use qrstore_settings::config::{QrStoreStorageSettings, StorageType};
use tracing::debug;

#[derive(Clone)]
pub struct AWSCreds {
    pub config: SdkConfig,
}

impl AWSCreds {
    pub async fn new() -> Result<Self, StorageError> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        Ok(Self { config })
    }
}

/// S3 returns no constraint (or an empty one) for buckets in us-east-1
pub fn location_from_constraint(constraint: Option<&BucketLocationConstraint>) -> Option<String> {
    constraint
        .map(|c| c.as_str().trim().to_string())
        .filter(|c| !c.is_empty())
}

pub struct AWSStorageClient {
    pub client: Client,
    pub bucket: String,
}

impl AWSStorageClient {
    pub fn from_client(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl StorageClient for AWSStorageClient {
    fn storage_type(&self) -> StorageType {
        StorageType::AWS
    }

    fn name(&self) -> &str {
        "AWSStorageClient"
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn new(settings: &QrStoreStorageSettings) -> Result<Self, StorageError> {
        let creds = AWSCreds::new().await?;
        let client = Client::new(&creds.config);

        Ok(Self::from_client(client, settings.bucket.clone()))
    }

    /// Upload an object to the bucket, replacing whatever was stored under `key`
    ///
    /// # Arguments
    ///
    /// * `key` - The object key
    /// * `body` - The object bytes
    /// * `content_type` - MIME type recorded on the object
    ///
    /// # Returns
    ///
    /// Ok if S3 accepted the write
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        debug!("Putting {} bytes to s3://{}/{}", body.len(), self.bucket, key);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Error(format!("Failed to put object: {}", e)))?;

        Ok(())
    }

    async fn bucket_location(&self) -> Result<Option<String>, StorageError> {
        let response = self
            .client
            .get_bucket_location()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| StorageError::Error(format!("Failed to get bucket location: {}", e)))?;

        Ok(location_from_constraint(response.location_constraint()))
    }
}
