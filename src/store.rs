//! Lookup List Store
//!
//! Per-screen reactive state for one orderable collection. The backend owns
//! the authoritative list; this holds the latest snapshot plus any optimistic
//! reorder applied on top of it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiResult, LookupApi};
use crate::lookup::LookupResource;
use crate::models::OrderableItem;
use crate::reorder::{is_contiguous, sort_by_order};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct LookupState {
    /// Display order; array position is authoritative for rendering
    pub items: Vec<OrderableItem>,
    pub load: LoadState,
}

impl LookupState {
    /// Fold a fetch result into the state
    pub fn apply_fetch(&mut self, result: ApiResult<Vec<OrderableItem>>) {
        match result {
            Ok(mut items) => {
                sort_by_order(&mut items);
                self.items = items;
                self.load = LoadState::Ready;
            }
            Err(e) => {
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }
}

/// Type alias for the store
pub type LookupStore = Store<LookupState>;

pub fn create_lookup_store() -> LookupStore {
    Store::new(LookupState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Re-fetch the collection and replace local state.
/// Writes are skipped if the screen was torn down meanwhile.
pub async fn refresh<A: LookupApi + ?Sized>(store: LookupStore, api: &A, resource: LookupResource) {
    let result = api.list(resource).await;
    match &result {
        Ok(items) => {
            log::debug!("[STORE] Loaded {} {}", items.len(), resource.path());
            if !is_contiguous(items) {
                log::debug!("[STORE] {} order values have gaps or duplicates", resource.path());
            }
        }
        Err(e) => log::error!("[STORE] Loading {} failed: {}", resource.path(), e),
    }

    let mut state = LookupState {
        items: store.items().try_get_untracked().unwrap_or_default(),
        load: LoadState::Loading,
    };
    state.apply_fetch(result);

    if let Some(mut items) = store.items().try_write() {
        *items = state.items;
    }
    if let Some(mut load) = store.load().try_write() {
        *load = state.load;
    }
}

/// Optimistically replace the displayed list
pub fn apply_local(store: &LookupStore, items: Vec<OrderableItem>) {
    if let Some(mut current) = store.items().try_write() {
        *current = items;
    }
}
