use qrstore_settings::config::QrStoreConfig;
use qrstore_storage::storage::enums::client::StorageClientEnum;
use std::sync::Arc;

/// Process-wide state, built once at startup and shared by every request
pub struct AppState {
    pub storage_client: Arc<StorageClientEnum>,
    pub config: Arc<QrStoreConfig>,
}
