//! truthguard-gw - Fact-Check Gateway
//!
//! Thin HTTP gateway over the TruthGuard fact-check pipeline. Exposes the
//! fact-check route and a health route; which search/reasoning capabilities
//! back the pipeline is decided purely by configuration, and the offline
//! fallbacks keep the service fully functional with none configured.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use truthguard_core::FactCheckOrchestrator;
use truthguard_gw::config::GatewayConfig;
use truthguard_gw::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting truthguard-gw (Fact-Check Gateway)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = GatewayConfig::resolve();
    let orchestrator = FactCheckOrchestrator::from_config(&config.providers);
    info!(
        "Evidence sources: {}",
        orchestrator.evidence_sources().join(", ")
    );
    info!(
        "Reasoning sources: {}",
        orchestrator.reasoning_sources().join(", ")
    );

    let state = AppState::new(orchestrator);
    let app = truthguard_gw::build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("Listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
