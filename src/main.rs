//! EquationShot server binary.
//!
//! Loads configuration from the environment, wires the Pandoc converter
//! behind the application handler, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use equationshot::adapters::http::{equation_router, EquationAppState};
use equationshot::adapters::PandocConverter;
use equationshot::application::GenerateDocumentHandler;
use equationshot::config::AppConfig;
use equationshot::ports::DocumentConverter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let mut converter = PandocConverter::new()
        .with_fallback_path(config.converter.fallback_path.clone())
        .with_timeout(config.converter.timeout_secs)
        .with_workspace_dir(config.converter.workspace_dir.clone());
    if let Some(path) = &config.converter.pandoc_path {
        converter = converter.with_pandoc_path(path.clone());
    }
    if !converter.is_available().await {
        warn!("pandoc not found on startup; conversions will rely on the fallback path");
    }

    let state = EquationAppState::new(Arc::new(GenerateDocumentHandler::new(Arc::new(converter))));

    let mut app = equation_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "equationshot listening");
    axum::serve(listener, app).await?;

    Ok(())
}
