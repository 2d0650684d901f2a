use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};

use point_crud::app_state::build_app_state;
use point_crud::config::AppConfig;
use point_crud::logging::init_tracing;
use point_crud::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _log_guard = init_tracing(&config);

    let state = build_app_state(&config);
    let app = app_router(state);

    let listener = TcpListener::bind(&config.server_addr).await?;
    info!("🚀 Server listening on {}", listener.local_addr()?);

    if config.debug_mode {
        let cfg = config.clone();
        tokio::spawn(async move {
            if let Err(e) = point_crud::debug::run_debug(&cfg).await {
                error!("❌ Debug run failed: {:?}", e);
            }
        });
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {:?}", e);
    }
}
