use anyhow::{Context, Result as AnyhowResult};
use qrstore_logging::logging::setup_logging;
use qrstore_settings::config::QrStoreConfig;
use qrstore_storage::storage::enums::client::{get_storage_system, StorageClientEnum};
use qrstore_utils::color::LogColors;
use tracing::info;

pub async fn setup_components() -> AnyhowResult<(QrStoreConfig, StorageClientEnum)> {
    // setup config
    let config = QrStoreConfig::from_env().context(LogColors::purple("Failed to load config"))?;

    // start logging
    setup_logging()
        .await
        .context(LogColors::purple("Failed to setup logging"))?;

    info!(
        "Starting {} {} ({}) ....",
        config.app_name, config.app_version, config.app_env
    );

    // the storage client lives for the rest of the process
    let storage = get_storage_system(&config)
        .await
        .context(LogColors::purple("Failed to setup storage client"))?;

    info!(
        "Storage client: {} (bucket: {})",
        storage.name(),
        storage.bucket()
    );

    Ok((config, storage))
}
