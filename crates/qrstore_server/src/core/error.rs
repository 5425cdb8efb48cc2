use axum::{http::StatusCode, Json};
use serde_json::json;
use std::fmt::Display;

pub fn internal_server_error<E: Display>(error: E) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
}
