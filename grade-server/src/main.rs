//! Grade Predict Server entry point

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grade_server::{config::Config, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    // Initialize logging; production emits JSON lines
    let json_logs = config.is_production();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "grade_server=debug,grade_core=info,tower_http=debug".into()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    tracing::info!("Grade Predict Server starting...");
    tracing::info!(
        "Artifacts: {} (model format: {})",
        config.artifacts.dir.display(),
        config.artifacts.model_format
    );

    // Artifacts are loaded exactly once; a bad artifact stops startup
    let predictor = grade_core::load_predictor(&config.artifacts)
        .with_context(|| format!("loading artifacts from {}", config.artifacts.dir.display()))?;

    let status = predictor.status();
    tracing::info!(
        model = %status.model_name,
        input_dim = status.input_dim,
        "Model ready"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_router(AppState::new(predictor, config));

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
