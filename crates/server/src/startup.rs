use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the pool, build the router and serve until `shutdown` resolves.
/// `cfg` is expected to be validated already.
pub async fn run_with_config<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let app: Router = routes::build_router(ServerState::from_db(db), build_cors());

    let bind = cfg.server.bind_addr();
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| StartupError::Bind(format!("{bind}: {e}")))?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting restaurant server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "restaurant server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}
