//! New Item Form Component
//!
//! Entry control plus add button; submits on Enter or on click.

use leptos::html;
use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

/// Form for adding new items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty or whitespace-only names are silently ignored
        if store_add_item(&store, &new_name.get()) {
            set_new_name.set(String::new());
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add an item..."
                node_ref=input_ref
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
