//! List Row Component
//!
//! A single shopping-list row: checkbox, name label, remove button,
//! drag handle, in that order.

use leptos::prelude::*;
use leptos_dragsort::{make_on_mousedown, DndSignals};

use crate::models::ShoppingItem;
use crate::store::{store_remove_item, store_toggle_item, use_app_store};

/// A single item row in the list
#[component]
pub fn ListRow(item: ShoppingItem, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let purchased = item.purchased;
    let name = item.name.clone();

    // DnD: mousedown anywhere on the row except the checkbox or remove
    // button starts a pending drag
    let on_mousedown = make_on_mousedown(dnd, id);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    let row_class = move || {
        let mut c = String::from("list-item");
        if purchased { c.push_str(" purchased"); }
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <li class=row_class data-id=id.to_string() on:mousedown=on_mousedown>
            // Checkbox
            <input
                type="checkbox"
                checked=purchased
                on:change=move |_| store_toggle_item(&store, id)
            />

            // Name
            <span class="item-name">{name}</span>

            // Remove button
            <button class="remove-btn" on:click=move |_| store_remove_item(&store, id)>
                "×"
            </button>

            // Drag handle
            <span class="drag-handle">"::"</span>
        </li>
    }
}
