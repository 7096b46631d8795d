use std::sync::Arc;

use anyhow::Context;
use collector::FisCollector;

mod app;
mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting FIS alpine results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        "Scraping {} for season {}",
        config.collector.base_url,
        config.collector.season_code
    );

    let collector =
        FisCollector::new(config.collector.clone()).context("Failed to build FIS collector")?;
    let state = AppState::new(Arc::new(collector), config.request_timeout);
    let app = app::build_app(state);

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
