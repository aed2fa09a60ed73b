//! Jarvis Design Agent (jarvis-da) - Main entry point
//!
//! Serves deterministic design suggestions for a design tool or dashboard.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jarvis_common::config::{config_path, TomlConfig};
use jarvis_da::cli::Args;
use jarvis_da::store::ConfiguredStoreProbe;
use jarvis_da::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration is resolved before tracing exists so the configured
    // log level can seed the filter; the outcome is logged below.
    let config_file = config_path(args.config.as_deref());
    let config = match &config_file {
        Some(path) => TomlConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => TomlConfig::default(),
    }
    .apply_overrides(args.overrides());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Jarvis Design Agent (jarvis-da) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_file {
        Some(path) if path.exists() => info!("Loaded configuration from {}", path.display()),
        Some(path) => warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        ),
        None => warn!("Could not determine config directory, using built-in defaults"),
    }

    if config.cors.is_permissive() {
        info!("CORS: any origin allowed");
    } else {
        info!("CORS: allowed origins {:?}", config.cors.allowed_origins);
    }

    let probe = Arc::new(ConfiguredStoreProbe::new(config.diagnostics.clone()));
    let state = AppState::new(probe, config.cors.clone());
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("jarvis-da listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
