use std::sync::Arc;

use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;

/// State over a fresh in-memory store; the store handle is returned for
/// assertions.
pub fn make_test_state() -> (AppState, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    (AppState::new(store.clone()), store)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryRecordStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}
