use crate::core::error::internal_server_error;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::IntoResponse;
use qrstore_utils::json::to_ascii_json;
use serde::{Deserialize, Serialize};
use tracing::error;

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "OPTIONS,POST,GET"),
];

#[derive(Serialize, Deserialize)]
pub struct QrRequest {
    pub url: String,
}

/// Public link to a stored QR code.
///
/// Serialized as a bare JSON string with non-ASCII characters escaped.
#[derive(Serialize, Deserialize)]
pub struct QrResponse {
    pub url: String,
}

impl IntoResponse for QrResponse {
    fn into_response(self) -> axum::response::Response {
        match to_ascii_json(&self.url) {
            Ok(body) => (
                StatusCode::OK,
                CORS_HEADERS,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                internal_server_error(e).into_response()
            }
        }
    }
}

/// Empty CORS preflight answer
pub struct Preflight;

impl IntoResponse for Preflight {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, CORS_HEADERS).into_response()
    }
}
