use crate::core::error::internal_server_error;
use crate::core::qr::schema::{Preflight, QrRequest, QrResponse};
use crate::core::state::AppState;
use axum::body::Bytes;
use axum::{extract::State, http::StatusCode, Json};
use qrstore_error::error::ServerError;
use qrstore_utils::key::derive_key;
use qrstore_utils::qr::{render_png, PNG_CONTENT_TYPE};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Render the requested URL as a QR code, store it and return its public link.
///
/// Every failure along the way is reported as the same 500 response.
pub async fn create_qr_code(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<QrResponse, (StatusCode, Json<serde_json::Value>)> {
    let request = serde_json::from_slice::<QrRequest>(&body).map_err(|e| {
        error!("Failed to parse request body: {}", e);
        internal_server_error(ServerError::RequestError(e.to_string()))
    })?;
    let url = request.url;

    let key = derive_key(&url).map_err(|e| {
        error!("Failed to derive key for {}: {}", url, e);
        internal_server_error(ServerError::RequestError(e.to_string()))
    })?;

    // the QR code always encodes the url exactly as it was sent
    let png = render_png(&url).map_err(|e| {
        error!("Failed to render QR code for {}: {}", url, e);
        internal_server_error(ServerError::from(e))
    })?;

    info!("Storing QR code for {} as {}", url, key);

    state
        .storage_client
        .put_object(&key, png, PNG_CONTENT_TYPE)
        .await
        .map_err(|e| {
            error!("Failed to store {}: {}", key, e);
            internal_server_error(ServerError::from(e))
        })?;

    // region is informational only, the link always uses the global endpoint
    let location = state.storage_client.bucket_location().await.map_err(|e| {
        error!("Failed to get bucket location: {}", e);
        internal_server_error(ServerError::from(e))
    })?;
    debug!(
        "Bucket {} region: {}",
        state.storage_client.bucket(),
        location.as_deref().unwrap_or("default")
    );

    Ok(QrResponse {
        url: state.config.public_url(&key),
    })
}

pub async fn preflight() -> Preflight {
    Preflight
}
