use eyre::WrapErr;
use online_shop::http::{self, AppState};
use online_shop::lifecycle::{setup_tracing, FromEnv, ShopConfig, ShopSystem};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    setup_tracing();

    let config = ShopConfig::from_env().wrap_err("Failed to load configuration")?;
    let system = ShopSystem::new(config.actor_buffer);
    let app = http::router(AppState::from(&system));

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", address))?;
    info!(%address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    system.shutdown().await.map_err(|e| eyre::eyre!(e))?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
