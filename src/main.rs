use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use mediaroute::infrastructure::observability::{TracingConfig, init_tracing};
use mediaroute::infrastructure::storage::SaveSinkFactory;
use mediaroute::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let sink = SaveSinkFactory::create(&settings.downloads)
        .context("Failed to initialize download sink")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState::new(settings, sink)?;
    tracing::info!(
        locales = state.supported_locales.iter().count(),
        default_locale = %state.default_locale,
        redirect_status = %state.settings.routing.redirect_status.status_code(),
        "Routing configured"
    );

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
