//! # geotrackd — geotrack daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load `.env`, the optional `geotrack.toml` and environment overrides
//! - Initialize logging
//! - Connect to `MongoDB`; refuse to start when it is unreachable
//! - Construct the repository, the application service and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use geotrack_adapter_http_axum::assets::Assets;
use geotrack_adapter_http_axum::state::AppState;
use geotrack_adapter_storage_mongodb::{Config as StorageConfig, MongoLocationRepository};
use geotrack_app::services::location_service::LocationService;
use geotrack_domain::error::TrackerError;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing `.env` is fine; the variables may come from the environment.
    let _ = dotenvy::dotenv();

    let config = Config::load().map_err(TrackerError::from)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let database = StorageConfig {
        connection_string: config.connection_string().to_owned(),
    }
    .build()
    .await
    .map_err(TrackerError::from)?;

    // Services
    let location_repo = MongoLocationRepository::new(database.locations());
    let location_service = LocationService::new(location_repo);

    // HTTP
    let state = AppState::new(location_service);
    let assets = Assets::from_dirs(&config.assets.templates_dir, &config.assets.static_dir);
    let app = geotrack_adapter_http_axum::router::build(state, &assets);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "geotrackd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("geotrackd stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
