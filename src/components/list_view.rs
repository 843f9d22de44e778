//! Shopping List View Component
//!
//! Renders the item rows and wires up drag-to-reorder.
//! Uses leptos-dragsort: the dragged row is re-placed live from the
//! pointer's position against the other rows' midpoints.

use leptos::prelude::*;
use leptos_dragsort::{bind_global_handlers, create_dnd_signals};

use crate::components::ListRow;
use crate::store::{store_place_item, use_app_store, AppStateStoreFields};

/// Selector for the draggable rows; each row carries its item id in data-id
const ROW_SELECTOR: &str = "#shopping-list .list-item";

/// List view component with DnD support
#[component]
pub fn ShoppingListView() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals and bind the global mousemove/mouseup handlers.
    // Reordering happens live during the gesture, so a drag that ends
    // anywhere leaves the row in its last computed slot.
    let dnd = create_dnd_signals();
    bind_global_handlers(dnd, ROW_SELECTOR, move |dragged_id, before_id| {
        store_place_item(&store, dragged_id, before_id);
    });

    view! {
        <ul id="shopping-list" class="shopping-list">
            <For
                each=move || store.items().get()
                key=|item| (item.id, item.name.clone(), item.purchased)
                children=move |item| view! { <ListRow item=item dnd=dnd /> }
            />
        </ul>
    }
}
