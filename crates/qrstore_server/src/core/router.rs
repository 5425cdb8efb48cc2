use crate::core::health::route::health_check;
use crate::core::qr::route::{create_qr_code, preflight};
use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Every path except the health check reaches the QR handler, so the router works
/// behind any API Gateway resource and stage prefix.
pub async fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .fallback(post(create_qr_code).options(preflight))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
