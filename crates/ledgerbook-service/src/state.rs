//! Application state.

use ledgerbook_store::LedgerStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: LedgerStore,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: LedgerStore, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
