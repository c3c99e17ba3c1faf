//! Application state shared across requests.
//!
//! Deliberately small: configuration plus the storage handle. Both are
//! read-only after startup, so the state is safe to clone into every request
//! without any locking.

use onboarding_core::Config;
use onboarding_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}
