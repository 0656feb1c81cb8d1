//! Application state shared across handlers

use std::sync::Arc;

use crate::db::QaStore;

/// Shared application state.
///
/// Handlers reach persistence only through the injected store, so tests
/// can swap in [`crate::db::MemoryStore`] or a purpose-built double.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn QaStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QaStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn QaStore {
        self.store.as_ref()
    }
}
