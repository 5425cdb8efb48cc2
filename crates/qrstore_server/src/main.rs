use anyhow::{Context, Result as AnyhowResult};
use qrstore_server::core::router::create_router;
use qrstore_server::core::setup::setup_components;
use qrstore_server::core::state::AppState;
use qrstore_utils::color::LogColors;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    let (config, storage) = setup_components().await?;
    let listen_addr = config.listen_addr();
    let lambda_runtime = config.lambda_runtime;

    let app_state = Arc::new(AppState {
        storage_client: Arc::new(storage),
        config: Arc::new(config),
    });
    let app = create_router(app_state).await;

    if lambda_runtime {
        info!("Running inside the Lambda runtime");
        return lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e));
    }

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", listen_addr))?;

    info!("{}", LogColors::green(&format!("listening on {}", listen_addr)));

    axum::serve(listener, app)
        .await
        .context(LogColors::purple("Server failure"))?;

    Ok(())
}
