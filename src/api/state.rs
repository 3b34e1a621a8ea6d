//! Application state for the Salary Manager API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::session::SessionContext;
use crate::store::Store;

/// Shared application state.
///
/// Contains the resources shared across all request handlers: the record
/// store, the session context and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
    sessions: Arc<SessionContext>,
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state around an empty store.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(Store::new()),
            sessions: Arc::new(SessionContext::new()),
            config: Arc::new(config),
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the session context.
    pub fn sessions(&self) -> &SessionContext {
        &self.sessions
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
