use ponto::{resolve_data_path, router, AppState, Clock, JsonFileStore, PointStore, SystemClock};
use std::{env, net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = JsonFileStore::open(&data_path, Arc::clone(&clock)).await;
    info!(
        path = %store.path().display(),
        events = store.load().await.len(),
        "punch store loaded"
    );

    let store: Arc<dyn PointStore> = Arc::new(store);
    let app = router(AppState::new(store, clock));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
