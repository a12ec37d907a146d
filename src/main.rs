use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skiclub_mock::api::Simulator;
use skiclub_mock::config::{Cli, Config};
use skiclub_mock::fixtures::Fixtures;
use skiclub_mock::routes;
use skiclub_mock::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    let fixtures = match &config.simulator.fixtures {
        Some(path) => {
            tracing::info!("Loading fixtures from {}", path.display());
            Fixtures::load(path)?
        }
        None => Fixtures::seed(),
    };

    let settings = config.simulator.settings();
    tracing::info!(
        "Simulated latency {:?}, writes {:?}, unknown routes {:?}",
        settings.latency,
        settings.write_mode,
        settings.unknown_routes
    );

    let simulator =
        Simulator::from_fixtures(fixtures, settings).context("building fixture store")?;
    let app = routes::build_router(AppState::new(simulator));

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Mock API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
