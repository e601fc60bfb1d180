//! Session State Store
//!
//! Fetched items and load status, using Leptos reactive_stores for
//! field-level reactivity. Written once, by the load completion handler.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{CatalogError, CatalogResult};
use crate::logging;
use crate::models::Item;

/// Where the one-shot startup fetch stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(CatalogError),
}

#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Items in document order, never reordered or edited
    pub items: Vec<Item>,
    pub load_state: LoadState,
    /// Filter pass count when the load settled
    pub settled_at_pass: u32,
}

pub type CatalogStore = Store<CatalogState>;

pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

/// Split a load result into the item set and the state to record
pub fn settle(result: CatalogResult<Vec<Item>>) -> (Vec<Item>, LoadState) {
    match result {
        Ok(items) => (items, LoadState::Loaded),
        Err(e) => (Vec::new(), LoadState::Failed(e)),
    }
}

/// Whether the user has re-filtered since the load settled. While loading,
/// any change counts.
pub fn filtered_since_load(passes: u32, settled_at_pass: u32) -> bool {
    passes > settled_at_pass
}

/// Completion handler for the startup fetch. `pass` is the current filter
/// pass count, so only later changes replace a load error.
pub fn store_complete_load(store: &CatalogStore, result: CatalogResult<Vec<Item>>, pass: u32) {
    if let Err(e) = &result {
        logging::error(&format!("[APP] Load failed: {} ({})", e, e.detail()));
    }
    let (items, state) = settle(result);
    *store.items().write() = items;
    *store.load_state().write() = state;
    *store.settled_at_pass().write() = pass;
}
