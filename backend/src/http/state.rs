//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ChartStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chart directory, also served under `/static`
    pub charts: ChartStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state from the loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            charts: ChartStore::new(config.storage.static_dir.clone()),
            config: Arc::new(config),
        }
    }
}
