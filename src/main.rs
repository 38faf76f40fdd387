//! Pre-Surgery Analyzer - Main Entry Point
//!
//! Loads the four model artifacts, then serves the patient form over HTTP.
//! Submissions are handled one at a time on a single-threaded runtime.

use anyhow::{Context, Result};
use pre_surgery_analyzer::{
    analyzer::Analyzer,
    collector::InputCollector,
    config::{AppConfig, LoggingConfig},
    metrics::AnalyzerMetrics,
    models::load_models,
    web::{self, AppState},
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging)?;

    info!("Starting Pre-Surgery Analyzer");
    info!(
        models_dir = %config.models.models_dir,
        bind_addr = %config.server.bind_addr,
        emoji = config.display.emoji,
        show_survival_likelihood = config.display.show_survival_likelihood,
        "Configuration loaded"
    );

    let collector = InputCollector::new();
    info!(
        "Input collector initialized ({} features: {:?})",
        collector.feature_count(),
        collector.feature_names()
    );

    // Every artifact is required before the form is served
    let registry = load_models(&config.models).context("Failed to load model artifacts")?;
    info!(
        "Model registry initialized with {} models: {:?}",
        registry.model_count(),
        registry.model_names()
    );

    let metrics = Arc::new(AnalyzerMetrics::new());
    let analyzer = Analyzer::with_metrics(registry, &config.display, metrics.clone());
    let app = web::router(AppState::new(analyzer, config.display.clone()));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    info!("Serving form on http://{}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Analyzer shutting down...");
    metrics.print_summary();

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("pre_surgery_analyzer={}", logging.level).parse()?);

    if logging.format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
