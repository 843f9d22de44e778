//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::ShoppingItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in render order; the sole source of truth for the list
    pub items: Vec<ShoppingItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item; returns false when the trimmed name is empty.
pub fn store_add_item(store: &AppStore, name: &str) -> bool {
    list::add_item(&mut store.items().write(), name)
}

/// Flip the purchased flag of an item by ID
pub fn store_toggle_item(store: &AppStore, id: u32) {
    list::toggle_item(&mut store.items().write(), id);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, id: u32) {
    list::remove_item(&mut store.items().write(), id);
}

/// Re-place an item before `before` (None = end of list).
///
/// Skips the store write when the item is already in the computed slot,
/// since the drag gesture calls this on every pointer move.
pub fn store_place_item(store: &AppStore, id: u32, before: Option<u32>) {
    if !list::would_move(&store.items().get_untracked(), id, before) {
        return;
    }
    list::place_item(&mut store.items().write(), id, before);
}
