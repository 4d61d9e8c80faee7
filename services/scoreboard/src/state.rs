use crate::store::MatchStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MatchStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MatchStore::new()))
    }

    /// Share an existing store, e.g. to inspect it from a test
    pub fn with_store(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
