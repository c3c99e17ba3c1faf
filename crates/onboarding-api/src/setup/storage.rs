//! Storage setup and initialization

use anyhow::Result;
use onboarding_core::Config;
use onboarding_storage::{create_storage, Storage};
use std::sync::Arc;

/// Setup the object-storage backend from configuration.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = %storage.backend_type(),
        "Storage backend initialized"
    );
    Ok(storage)
}
