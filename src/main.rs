use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{error, info, warn};

use marquee::logging::{init_tracing, shutdown_tracer};
use marquee::metrics::{init_metrics, metrics_app};
use marquee::router::init_router;
use marquee::state::init_app_state;
use marquee_cli::seeder::{SeedConfig, ensure_default_admin, seed_sample_movies};
use marquee_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let state = init_app_state().await?;

    let seed_config = SeedConfig::from_env();
    if ensure_default_admin(&state.db, &seed_config).await? {
        info!(email = %seed_config.admin_email, "Default admin created");
    }
    let seeded = seed_sample_movies(&state.db, &seed_config).await?;
    if seeded > 0 {
        info!(count = seeded, "Sample movies seeded");
    }

    let mut app = init_router(state);
    match init_metrics() {
        Some(handle) => app = app.merge(metrics_app(handle)),
        None => warn!("Metrics endpoint disabled"),
    }

    let address = ServerConfig::from_env().bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
