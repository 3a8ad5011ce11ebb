/// Shared application state
use crate::config::GraphqlSettings;
use crate::schema::{build_schema, RosterSchema};
use roster_storage::SharedStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub schema: RosterSchema,
}

impl AppState {
    pub fn new(store: SharedStore, settings: &GraphqlSettings) -> Self {
        let schema = build_schema(store.clone(), settings);
        Self { store, schema }
    }
}
