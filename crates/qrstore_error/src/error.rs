use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings Error: {0}")]
    Error(String),

    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage Error: {0}")]
    Error(String),

    #[error("Storage Error. Unsupported storage type: {0}")]
    UnsupportedClient(String),
}

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Failed to encode data as a QR code: {0}")]
    EncodeError(String),

    #[error("Failed to write QR image as png: {0}")]
    PngError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request body: {0}")]
    RequestError(String),

    #[error("Failed to render QR code: {0}")]
    RenderError(String),

    #[error("Failed to store QR code: {0}")]
    UploadError(String),
}

impl From<QrError> for ServerError {
    fn from(err: QrError) -> ServerError {
        ServerError::RenderError(err.to_string())
    }
}

impl From<StorageError> for ServerError {
    fn from(err: StorageError) -> ServerError {
        ServerError::UploadError(err.to_string())
    }
}
