//! Application setup and initialization
//!
//! All startup logic lives here instead of main.rs: telemetry, storage, and
//! route construction.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use onboarding_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_tracing();

    tracing::info!(environment = %config.environment, "Configuration loaded");

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
