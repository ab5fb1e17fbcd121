//! Catalog API - REST server over an in-memory product catalog

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::CatalogRepository;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let seeded = state.repository.count().await?;
    info!(items = seeded, "Catalog seeded");

    let app = api::app(&state)?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(10),
        async move {
            info!("Shutting down: dropping in-memory catalog");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
