use qrstore_error::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_LOCAL_ROOT: &str = "./qrstore_local";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Set by the Lambda execution environment
const LAMBDA_RUNTIME_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum StorageType {
    AWS,
    Local,
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::AWS => write!(f, "aws"),
            StorageType::Local => write!(f, "local"),
        }
    }
}

impl StorageType {
    pub fn from_str(s: &str) -> Result<StorageType, SettingsError> {
        let trimmed_lowercase = s.trim().trim_matches('"').to_lowercase();
        match trimmed_lowercase.as_str() {
            "aws" | "s3" => Ok(StorageType::AWS),
            "local" => Ok(StorageType::Local),
            _ => Err(SettingsError::Error(format!(
                "Unsupported storage type: {}",
                s
            ))),
        }
    }
}

/// Settings handed to every storage client
#[derive(Debug, Clone)]
pub struct QrStoreStorageSettings {
    pub bucket: String,
    pub storage_type: StorageType,
    pub local_root: PathBuf,
}

/// QrStoreConfig is read once at process start and shared for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct QrStoreConfig {
    pub app_name: String,
    pub app_env: String,
    pub app_version: String,
    pub bucket: String,
    pub storage_type: StorageType,
    pub local_root: PathBuf,
    pub host: String,
    pub port: u16,
    pub lambda_runtime: bool,
}

impl QrStoreConfig {
    /// Build the config from the process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup("QRSTORE_BUCKET")
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .ok_or_else(|| SettingsError::MissingVar("QRSTORE_BUCKET".to_string()))?;

        let storage_type = match lookup("QRSTORE_STORAGE_TYPE") {
            Some(value) => StorageType::from_str(&value)?,
            None => StorageType::AWS,
        };

        let port = match lookup("QRSTORE_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| {
                SettingsError::Error(format!("Invalid QRSTORE_PORT {}: {}", value, e))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(QrStoreConfig {
            app_name: "qrstore".to_string(),
            app_env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            bucket,
            storage_type,
            local_root: PathBuf::from(
                lookup("QRSTORE_LOCAL_ROOT").unwrap_or_else(|| DEFAULT_LOCAL_ROOT.to_string()),
            ),
            host: lookup("QRSTORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            lambda_runtime: lookup(LAMBDA_RUNTIME_VAR).is_some(),
        })
    }

    pub fn storage_settings(&self) -> QrStoreStorageSettings {
        QrStoreStorageSettings {
            bucket: self.bucket.clone(),
            storage_type: self.storage_type.clone(),
            local_root: self.local_root.clone(),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public link for an object in the configured bucket.
    ///
    /// Always the global S3 endpoint; the bucket region is not part of the link.
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket, key)
    }
}
