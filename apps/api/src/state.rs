use std::sync::Arc;

use chrono::Duration;

use crate::catalog::selector::SelectorSettings;
use crate::catalog::IndustryCatalog;
use crate::config::Config;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only for the life of the process.
    pub catalog: Arc<IndustryCatalog>,
    pub selector_settings: SelectorSettings,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: &Config, catalog: IndustryCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            selector_settings: config.selector_settings(),
            sessions: SessionStore::new(Duration::minutes(config.session_ttl_minutes)),
        }
    }
}
